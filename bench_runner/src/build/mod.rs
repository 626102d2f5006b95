//!
//! The benchmark executables build step.
//!

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use colored::Colorize;

use crate::layout::Layout;
use crate::runner::command::Command;
use crate::runner::completion::Completion;
use crate::runner::CommandRunner;
use crate::summary::Summary;

///
/// The benchmark executables build step.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    /// The build command.
    command: Command,
}

impl Build {
    ///
    /// Creates the build step from the layout build command.
    ///
    pub fn new(layout: &Layout) -> anyhow::Result<Self> {
        let (program, arguments) = layout
            .build_command
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("The build command is empty"))?;
        Ok(Self {
            command: Command::new(PathBuf::from(program), arguments.to_vec()),
        })
    }

    ///
    /// The build command.
    ///
    pub fn command(&self) -> &Command {
        &self.command
    }

    ///
    /// Runs the build to completion.
    ///
    /// The completion is recorded but never stops the orchestration.
    ///
    pub fn run(&self, runner: &mut dyn CommandRunner, summary: &mut Summary) -> Completion {
        summary.status("Building".bright_green().bold(), &self.command);
        let completion = runner.run(&self.command);
        tracing::info!(command = %self.command, %completion, "build finished");
        summary.push(None, self.command.clone(), completion.clone());
        completion
    }
}
