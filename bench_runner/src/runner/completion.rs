//!
//! The external command completion.
//!

///
/// How an external command finished.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The process exited with the code.
    Exited(i32),
    /// The process was terminated by a signal.
    Terminated,
    /// The process could not be started.
    NotStarted(String),
}

impl Completion {
    ///
    /// Whether the process exited with the zero code.
    ///
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Exited(0))
    }
}

impl From<std::process::ExitStatus> for Completion {
    fn from(status: std::process::ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Exited(code),
            None => Self::Terminated,
        }
    }
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exit code {code}"),
            Self::Terminated => write!(f, "terminated by a signal"),
            Self::NotStarted(error) => write!(f, "not started: {error}"),
        }
    }
}
