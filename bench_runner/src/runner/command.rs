//!
//! The external command.
//!

use std::path::PathBuf;

///
/// The external command: a program and its arguments.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The program path or name.
    pub program: PathBuf,
    /// The program arguments.
    pub arguments: Vec<String>,
}

impl Command {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(program: PathBuf, arguments: Vec<String>) -> Self {
        Self { program, arguments }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for argument in self.arguments.iter() {
            write!(f, " {argument}")?;
        }
        Ok(())
    }
}
