//!
//! The orchestrator workflows.
//!

///
/// Describes sets of actions that the orchestrator is able to perform.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// Only build the benchmark executables.
    BuildOnly,
    /// Build the executables and run the benchmarks.
    #[default]
    BuildAndRun,
}

impl std::str::FromStr for Workflow {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "build" => Ok(Self::BuildOnly),
            "run" => Ok(Self::BuildAndRun),
            string => anyhow::bail!(
                "Unknown workflow `{string}`. Supported workflows: build, run"
            ),
        }
    }
}

impl std::fmt::Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuildOnly => write!(f, "build"),
            Self::BuildAndRun => write!(f, "run"),
        }
    }
}
