//!
//! The external command runner.
//!

pub mod command;
pub mod completion;


use self::command::Command;
use self::completion::Completion;

///
/// The capability of running external commands to completion.
///
/// Runners never fail: an unsuccessful command is reported through its completion.
///
pub trait CommandRunner {
    ///
    /// Runs the command, blocking until it finishes.
    ///
    fn run(&mut self, command: &Command) -> Completion;
}

///
/// The runner backed by real child processes, inheriting the standard streams.
///
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, command: &Command) -> Completion {
        tracing::debug!(%command, "spawning");
        let completion = match std::process::Command::new(command.program.as_path())
            .args(command.arguments.iter())
            .status()
        {
            Ok(status) => Completion::from(status),
            Err(error) => Completion::NotStarted(error.to_string()),
        };
        if completion.is_success() {
            tracing::debug!(%command, %completion, "finished");
        } else {
            tracing::warn!(%command, %completion, "finished unsuccessfully");
        }
        completion
    }
}
