//!
//! The project layout the orchestrator works in.
//!

pub mod error;


use std::path::Path;
use std::path::PathBuf;

use crate::variant::Variant;

use self::error::Error;

///
/// The project layout: where the executables live, where the results go, and how to build.
///
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Layout {
    /// The results root directory. Each variant writes into its own subdirectory.
    pub results_root: PathBuf,
    /// The Vulkan benchmark executable.
    pub vulkan_executable: PathBuf,
    /// The OpenGL benchmark executable.
    pub gl_executable: PathBuf,
    /// The build command and its arguments.
    pub build_command: Vec<String>,
    /// The results file name that is never checked for collisions.
    pub discard_file: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            results_root: PathBuf::from(Self::DEFAULT_RESULTS_ROOT),
            vulkan_executable: PathBuf::from(Self::DEFAULT_VULKAN_EXECUTABLE),
            gl_executable: PathBuf::from(Self::DEFAULT_GL_EXECUTABLE),
            build_command: Self::DEFAULT_BUILD_COMMAND
                .iter()
                .map(|argument| argument.to_string())
                .collect(),
            discard_file: Self::DEFAULT_DISCARD_FILE.to_owned(),
        }
    }
}

impl Layout {
    /// The default results root directory.
    pub const DEFAULT_RESULTS_ROOT: &'static str = "csv";

    /// The default Vulkan benchmark executable.
    pub const DEFAULT_VULKAN_EXECUTABLE: &'static str = "./vulkan/vulkan";

    /// The default OpenGL benchmark executable.
    pub const DEFAULT_GL_EXECUTABLE: &'static str = "./gl/gl";

    /// The default build command.
    pub const DEFAULT_BUILD_COMMAND: [&'static str; 3] = ["make", "-j", "4"];

    /// The default discard sentinel.
    pub const DEFAULT_DISCARD_FILE: &'static str = "/dev/null";

    ///
    /// Reads the layout from a JSON file and validates it.
    /// Fields missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// 1. File cannot be read.
    /// 2. Deserialization from JSON file failed.
    /// 3. Layout validation failed.
    ///
    pub fn try_from_path(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let layout: Self =
            serde_json::from_str(contents.as_str()).map_err(|source| Error::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        layout.validate()?;
        Ok(layout)
    }

    ///
    /// Checks that the layout is well-formed.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        if self.build_command.is_empty() {
            return Err(Error::EmptyBuildCommand);
        }
        if self.results_root.as_os_str().is_empty() {
            return Err(Error::EmptyResultsRoot);
        }
        Ok(())
    }

    ///
    /// Returns the benchmark executable of the variant.
    ///
    pub fn executable(&self, variant: Variant) -> &Path {
        match variant {
            Variant::Vulkan => self.vulkan_executable.as_path(),
            Variant::Gl => self.gl_executable.as_path(),
        }
    }

    ///
    /// Returns the results file path of the variant.
    ///
    /// An absolute file name, such as the discard sentinel, replaces the whole path.
    ///
    pub fn output_path(&self, variant: Variant, file: &str) -> PathBuf {
        self.results_root.join(variant.name()).join(file)
    }

    ///
    /// Whether the results file name is the discard sentinel.
    ///
    pub fn is_discarded(&self, file: &str) -> bool {
        file == self.discard_file
    }
}
