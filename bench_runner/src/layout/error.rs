//!
//! The layout error.
//!

use std::path::PathBuf;

///
/// The layout error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The layout file cannot be read.
    #[error("Layout file {path:?} reading error: {source}")]
    Read {
        /// The layout file path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The layout file is not valid JSON.
    #[error("Layout file {path:?} parsing error: {source}")]
    Parse {
        /// The layout file path.
        path: PathBuf,
        /// The underlying error.
        source: serde_json::Error,
    },
    /// The build command is empty.
    #[error("The `build_command` field in the layout is empty")]
    EmptyBuildCommand,
    /// The results root is empty.
    #[error("The `results_root` field in the layout is empty")]
    EmptyResultsRoot,
}
