//!
//! The benchmark run request.
//!


use crate::variant::Variant;

///
/// The user intent for running one benchmark variant.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// The benchmark executable to run.
    pub variant: Variant,
    /// Whether to run the small fixed-shape debug configuration.
    pub debug: bool,
    /// The explicit threads count. `None` sweeps over all supported counts.
    pub threads: Option<u32>,
    /// The number of repetitions for each threads count. Zero sweeps nothing.
    pub times: u32,
    /// The number of frames. `None` leaves the executable default.
    pub frames: Option<u32>,
    /// The number of cubes.
    pub cubes: u32,
    /// The results file name, relative to the variant results directory.
    pub file: String,
}

impl RunRequest {
    /// The default number of repetitions.
    pub const DEFAULT_TIMES: u32 = 1;

    /// The default number of cubes.
    pub const DEFAULT_CUBES: u32 = 40000;

    /// The default results file name.
    pub const DEFAULT_FILE: &'static str = "time.csv";

    ///
    /// A shortcut constructor with the default parameters.
    ///
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            debug: false,
            threads: None,
            times: Self::DEFAULT_TIMES,
            frames: None,
            cubes: Self::DEFAULT_CUBES,
            file: Self::DEFAULT_FILE.to_owned(),
        }
    }

    ///
    /// Returns the same request for another variant.
    ///
    pub fn for_variant(&self, variant: Variant) -> Self {
        Self {
            variant,
            ..self.clone()
        }
    }
}
