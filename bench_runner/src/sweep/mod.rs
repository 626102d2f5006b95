//!
//! The benchmark sweep controller.
//!

pub mod outcome;
pub mod plan;


use std::path::PathBuf;

use crate::configuration::RunConfiguration;
use crate::confirmation::Confirmation;
use crate::layout::Layout;
use crate::request::RunRequest;
use crate::runner::command::Command;
use crate::runner::CommandRunner;
use crate::summary::Summary;

use self::outcome::Outcome;
use self::plan::Plan;

///
/// The benchmark sweep controller.
///
/// Expands a run request into benchmark invocations and executes them one after another.
///
pub struct Sweep;

impl Sweep {
    /// The smallest swept threads count.
    pub const THREADS_MIN: u32 = 1;

    /// The largest swept threads count.
    pub const THREADS_MAX: u32 = 4;

    ///
    /// Expands the request into the ordered invocation configurations.
    ///
    /// With an explicit threads count, there is exactly one invocation and the repetitions
    /// are ignored. Otherwise, every threads count is run `times` times, and only the first
    /// repetition of each threads count may overwrite the results file. Repeated runs are
    /// restricted to single-frame measurements.
    ///
    pub fn plan(request: &RunRequest, output_path: PathBuf) -> Plan {
        let base = if request.debug {
            RunConfiguration::debug(output_path)
        } else {
            RunConfiguration::new(
                request.frames,
                RunConfiguration::DEFAULT_THREADS,
                request.cubes,
                output_path,
                true,
            )
        };

        if let Some(threads) = request.threads {
            return Plan::new(base, threads..=threads, 1, false);
        }

        let frames_forced = request.times > 1 && base.frames.is_some_and(|frames| frames > 1);
        let base = if frames_forced {
            base.with_frames(Some(1))
        } else {
            base
        };

        Plan::new(
            base,
            Self::THREADS_MIN..=Self::THREADS_MAX,
            request.times,
            frames_forced,
        )
    }

    ///
    /// Runs the request.
    ///
    /// If the results file exists and is not the discard sentinel, the overwrite must be
    /// confirmed first. A refusal ends the sweep before any invocation.
    /// The benchmark completions are recorded in the summary, but never stop the sweep.
    ///
    pub fn run(
        request: &RunRequest,
        layout: &Layout,
        confirmation: &mut dyn Confirmation,
        runner: &mut dyn CommandRunner,
        summary: &mut Summary,
    ) -> anyhow::Result<Outcome> {
        let _span = tracing::info_span!("sweep", variant = %request.variant).entered();

        let executable = layout.executable(request.variant).to_path_buf();
        let output_path = layout.output_path(request.variant, request.file.as_str());

        if output_path.exists()
            && !layout.is_discarded(request.file.as_str())
            && !confirmation.confirm(output_path.as_path())?
        {
            tracing::info!(path = %output_path.display(), "overwrite refused");
            return Ok(Outcome::Aborted);
        }

        summary.sweeping(request.variant, output_path.as_path());

        let plan = Self::plan(request, output_path);
        tracing::info!(invocations = plan.len(), "sweep planned");
        if plan.is_empty() {
            summary.warning(format!("No invocations planned for {}", request.variant));
        }
        if plan.frames_forced {
            tracing::warn!(
                times = request.times,
                "frames count reset to 1 for repeated runs"
            );
            summary.warning(
                "Resetting the number of frames to 1, as repeated runs require single-frame measurements",
            );
        }

        for (index, configuration) in plan.configurations().enumerate() {
            let command = Command::new(executable.clone(), configuration.build());
            tracing::debug!(
                index,
                threads = configuration.threads,
                overwrite = configuration.overwrite,
                "invocation"
            );
            summary.running(&command);
            let completion = runner.run(&command);
            summary.push(Some(request.variant), command, completion);
        }

        Ok(Outcome::Completed)
    }
}
