//!
//! The sweep outcome.
//!

///
/// How a sweep or the whole orchestration ended.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every planned invocation has been issued.
    Completed,
    /// The user refused to overwrite the existing results file.
    Aborted,
}
