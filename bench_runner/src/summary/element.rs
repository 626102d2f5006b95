//!
//! The orchestrator summary element.
//!

use crate::runner::command::Command;
use crate::runner::completion::Completion;
use crate::variant::Variant;

///
/// The orchestrator summary element: one finished external command.
///
#[derive(Debug, Clone)]
pub struct Element {
    /// The benchmark variant, or `None` for the build step.
    pub variant: Option<Variant>,
    /// The executed command.
    pub command: Command,
    /// How the command finished.
    pub completion: Completion,
}

impl Element {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(variant: Option<Variant>, command: Command, completion: Completion) -> Self {
        Self {
            variant,
            command,
            completion,
        }
    }

    ///
    /// The element name used in the report.
    ///
    pub fn name(&self) -> String {
        match self.variant {
            Some(variant) => format!("{variant}"),
            None => "build".to_owned(),
        }
    }
}
