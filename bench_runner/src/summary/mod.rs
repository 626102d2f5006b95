//!
//! The orchestrator summary.
//!

pub mod element;


use colored::Colorize;

use crate::runner::command::Command;
use crate::runner::completion::Completion;
use crate::variant::Variant;

use self::element::Element;

///
/// The orchestrator summary.
///
#[derive(Debug, Default)]
pub struct Summary {
    /// The summary elements.
    elements: Vec<Element>,
    /// The variants whose sweeps have started.
    sweeps: Vec<Variant>,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The successful commands counter.
    succeeded: usize,
    /// The failed commands counter.
    failed: usize,
    /// The commands that could not be started.
    not_started: usize,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            ..Self::default()
        }
    }

    ///
    /// The successful and total commands of each step, in the order the steps were first run.
    ///
    pub fn breakdown(&self) -> Vec<(String, usize, usize)> {
        let mut breakdown: Vec<(String, usize, usize)> = Vec::new();
        for element in self.elements.iter() {
            let name = element.name();
            let index = match breakdown.iter().position(|(existing, _, _)| *existing == name) {
                Some(index) => index,
                None => {
                    breakdown.push((name, 0, 0));
                    breakdown.len() - 1
                }
            };
            if element.completion.is_success() {
                breakdown[index].1 += 1;
            }
            breakdown[index].2 += 1;
        }
        for variant in self.sweeps.iter() {
            let name = variant.to_string();
            if !breakdown.iter().any(|(existing, _, _)| *existing == name) {
                breakdown.push((name, 0, 0));
            }
        }
        breakdown
    }

    ///
    /// The number of benchmark invocations, excluding the build step.
    ///
    pub fn invocations(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| element.variant.is_some())
            .count()
    }

    ///
    /// Whether every recorded command exited successfully.
    ///
    pub fn is_successful(&self) -> bool {
        self.failed == 0 && self.not_started == 0
    }

    ///
    /// Prints a status line, unless the output is suppressed.
    ///
    pub fn status(&self, status: colored::ColoredString, message: impl std::fmt::Display) {
        if !self.quiet {
            println!("{status:>12} {message}");
        }
    }

    ///
    /// Records the start of a variant sweep.
    ///
    pub fn sweeping(&mut self, variant: Variant, output_path: &std::path::Path) {
        self.status(
            "Sweeping".bright_green().bold(),
            format!("{variant} into {}", output_path.display()),
        );
        self.sweeps.push(variant);
    }

    ///
    /// Prints the command about to be executed.
    ///
    pub fn running(&self, command: &Command) {
        self.status("Running".bright_green().bold(), command);
    }

    ///
    /// Prints a warning.
    ///
    pub fn warning(&self, message: impl std::fmt::Display) {
        self.status("Warning".bright_yellow().bold(), message);
    }

    ///
    /// Records a finished command, printing it if it failed.
    ///
    pub fn push(&mut self, variant: Option<Variant>, command: Command, completion: Completion) {
        let element = Element::new(variant, command, completion);
        match element.completion {
            Completion::Exited(0) => self.succeeded += 1,
            Completion::Exited(_) | Completion::Terminated => {
                self.failed += 1;
                self.status(
                    "Failed".bright_red().bold(),
                    format!("{} ({})", element.command, element.completion),
                );
            }
            Completion::NotStarted(_) => {
                self.not_started += 1;
                self.status(
                    "Failed".red().bold(),
                    format!("{} ({})", element.command, element.completion),
                );
            }
        }
        self.elements.push(element);
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔═══════════════════╡ BENCHMARK RUNS ╞═════════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:11}                               {:10}     ║",
            "SUCCEEDED".green(),
            self.succeeded.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:11}                               {:10}     ║",
            "FAILED".bright_red(),
            self.failed.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "║     {:11}                               {:10}     ║",
            "NOT STARTED".red(),
            self.not_started.to_string().red(),
        )?;
        if !self.elements.is_empty() || !self.sweeps.is_empty() {
            writeln!(
                f,
                "║                                                              ║"
            )?;
        }
        for (name, succeeded, total) in self.breakdown() {
            writeln!(
                f,
                "║     {:11}                               {:>10}     ║",
                name.to_uppercase(),
                format!("{succeeded}/{total}"),
            )?;
        }
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
