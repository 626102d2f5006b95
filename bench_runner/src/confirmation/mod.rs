//!
//! The results file overwrite confirmation.
//!


use std::io::BufRead;
use std::io::Write;
use std::path::Path;

///
/// The capability of confirming that an existing results file may be overwritten.
///
pub trait Confirmation {
    ///
    /// Asks whether the existing results file at `path` may be overwritten.
    ///
    fn confirm(&mut self, path: &Path) -> anyhow::Result<bool>;
}

///
/// The interactive confirmation prompt.
///
#[derive(Debug)]
pub struct PromptConfirmation<R, W> {
    /// The answers source.
    input: R,
    /// The prompt destination.
    output: W,
}

impl<R, W> PromptConfirmation<R, W>
where
    R: BufRead,
    W: Write,
{
    /// The only answer accepted as consent.
    pub const AFFIRMATIVE: &'static str = "y";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirmation<std::io::StdinLock<'static>, std::io::Stdout> {
    ///
    /// The prompt on the process terminal.
    ///
    pub fn terminal() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> Confirmation for PromptConfirmation<R, W>
where
    R: BufRead,
    W: Write,
{
    fn confirm(&mut self, path: &Path) -> anyhow::Result<bool> {
        write!(
            self.output,
            "File {} already exists. Overwrite? [y/n] ",
            path.display()
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let answer = answer
            .strip_suffix('\n')
            .map(|answer| answer.strip_suffix('\r').unwrap_or(answer))
            .unwrap_or(answer.as_str());
        tracing::debug!(path = %path.display(), answer, "overwrite confirmation");

        Ok(answer == Self::AFFIRMATIVE)
    }
}

///
/// The confirmation that always gives the same answer.
///
#[derive(Debug, Clone, Copy)]
pub struct AssumeAnswer(pub bool);

impl Confirmation for AssumeAnswer {
    fn confirm(&mut self, path: &Path) -> anyhow::Result<bool> {
        tracing::debug!(path = %path.display(), answer = self.0, "assumed overwrite confirmation");
        Ok(self.0)
    }
}
