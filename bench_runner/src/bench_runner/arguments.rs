//!
//! The benchmark orchestrator arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark orchestrator arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Runs the Vulkan program for timings.
    #[arg(long)]
    pub vulkan: bool,

    /// Runs the OpenGL program for timings.
    #[arg(long)]
    pub gl: bool,

    /// Runs a small fixed configuration to check that the programs work.
    #[arg(short, long)]
    pub debug: bool,

    /// The number of cubes to render. Must be a square number greater than 1.
    #[arg(long = "num_cubes", default_value_t = bench_runner::RunRequest::DEFAULT_CUBES)]
    pub num_cubes: u32,

    /// The number of frames to render.
    /// Is left to the program default if not set.
    #[arg(long = "num_frames")]
    pub num_frames: Option<u32>,

    /// The results file name, relative to `<results-root>/<variant>/`.
    #[arg(long, default_value = bench_runner::RunRequest::DEFAULT_FILE)]
    pub file: String,

    /// If more than 1, runs the program many times for each threads count.
    #[arg(long = "num_times", default_value_t = bench_runner::RunRequest::DEFAULT_TIMES)]
    pub num_times: u32,

    /// Runs the program once with the specified number of threads.
    /// Sweeps over all supported threads counts if set to 0.
    #[arg(long = "num_threads", default_value_t = 0)]
    pub num_threads: u32,

    /// Path to the JSON file describing the project layout.
    /// The executables are expected in `./vulkan/` and `./gl/`, and the results go to `./csv/` by default.
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Choose between `build` to build the programs only, and `run` to build and run.
    #[arg(long, default_value_t = bench_runner::Workflow::BuildAndRun)]
    pub workflow: bench_runner::Workflow,

    /// Increases the logging verbosity. May be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppresses the status output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    ///
    /// Validates the command line arguments.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.verbose > 0 && self.quiet {
            anyhow::bail!("The `--verbose` and `--quiet` options are mutually exclusive");
        }
        Ok(())
    }

    ///
    /// The selected variants.
    ///
    pub fn variants(&self) -> Vec<bench_runner::Variant> {
        let mut variants = Vec::with_capacity(bench_runner::Variant::ALL.len());
        if self.vulkan {
            variants.push(bench_runner::Variant::Vulkan);
        }
        if self.gl {
            variants.push(bench_runner::Variant::Gl);
        }
        variants
    }

    ///
    /// The run request shared by the selected variants.
    ///
    pub fn request(&self) -> bench_runner::RunRequest {
        bench_runner::RunRequest {
            variant: self
                .variants()
                .first()
                .copied()
                .unwrap_or(bench_runner::Variant::Vulkan),
            debug: self.debug,
            threads: Some(self.num_threads).filter(|threads| *threads > 0),
            times: self.num_times,
            frames: self.num_frames,
            cubes: self.num_cubes,
            file: self.file.clone(),
        }
    }
}
