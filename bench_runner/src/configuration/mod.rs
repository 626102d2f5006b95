//!
//! The benchmark run configuration.
//!


use std::path::PathBuf;

///
/// The parameters of a single benchmark executable invocation.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// The number of frames to render. `None` leaves the executable default.
    pub frames: Option<u32>,
    /// The number of rendering threads.
    pub threads: u32,
    /// The number of cubes to render.
    pub cubes: u32,
    /// The timing results destination.
    pub output_path: PathBuf,
    /// Whether the executable must overwrite the existing results file.
    pub overwrite: bool,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            frames: None,
            threads: Self::DEFAULT_THREADS,
            cubes: Self::DEFAULT_CUBES,
            output_path: PathBuf::from(Self::DEFAULT_OUTPUT_PATH),
            overwrite: false,
        }
    }
}

impl RunConfiguration {
    /// The default number of threads.
    pub const DEFAULT_THREADS: u32 = 1;

    /// The default number of cubes.
    pub const DEFAULT_CUBES: u32 = 16;

    /// The default results file.
    pub const DEFAULT_OUTPUT_PATH: &'static str = "time.csv";

    /// The number of frames rendered in debug mode.
    pub const DEBUG_FRAMES: u32 = 100;

    /// The cubes count flag.
    pub const FLAG_CUBES: &'static str = "-num_cubes";

    /// The threads count flag.
    pub const FLAG_THREADS: &'static str = "-num_threads";

    /// The results file flag.
    pub const FLAG_FILE: &'static str = "-file";

    /// The overwrite flag.
    pub const FLAG_OVERWRITE: &'static str = "-overwrite";

    /// The frames count flag.
    pub const FLAG_FRAMES: &'static str = "-num_frames";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        frames: Option<u32>,
        threads: u32,
        cubes: u32,
        output_path: PathBuf,
        overwrite: bool,
    ) -> Self {
        Self {
            frames,
            threads,
            cubes,
            output_path,
            overwrite,
        }
    }

    ///
    /// The small fixed-shape configuration used to sanity-check the executables.
    ///
    pub fn debug(output_path: PathBuf) -> Self {
        Self::new(
            Some(Self::DEBUG_FRAMES),
            Self::DEFAULT_THREADS,
            Self::DEFAULT_CUBES,
            output_path,
            true,
        )
    }

    ///
    /// Returns a copy with the specified number of threads.
    ///
    pub fn with_threads(&self, threads: u32) -> Self {
        Self {
            threads,
            ..self.clone()
        }
    }

    ///
    /// Returns a copy with the specified number of frames.
    ///
    pub fn with_frames(&self, frames: Option<u32>) -> Self {
        Self {
            frames,
            ..self.clone()
        }
    }

    ///
    /// Returns a copy with the specified overwrite flag.
    ///
    pub fn with_overwrite(&self, overwrite: bool) -> Self {
        Self {
            overwrite,
            ..self.clone()
        }
    }

    ///
    /// Builds the executable arguments.
    ///
    /// The order is fixed: cubes, threads, file, then the optional overwrite and frames flags.
    ///
    pub fn build(&self) -> Vec<String> {
        let mut arguments = vec![
            Self::FLAG_CUBES.to_owned(),
            self.cubes.to_string(),
            Self::FLAG_THREADS.to_owned(),
            self.threads.to_string(),
            Self::FLAG_FILE.to_owned(),
            self.output_path.to_string_lossy().to_string(),
        ];
        if self.overwrite {
            arguments.push(Self::FLAG_OVERWRITE.to_owned());
        }
        if let Some(frames) = self.frames.filter(|frames| *frames > 0) {
            arguments.push(Self::FLAG_FRAMES.to_owned());
            arguments.push(frames.to_string());
        }
        arguments
    }
}
