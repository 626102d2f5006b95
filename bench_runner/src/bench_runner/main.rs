//!
//! The benchmark orchestrator binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;
pub(crate) mod tracing_config;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The process exit code on success, including the user-directed abort.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    arguments.validate()?;
    tracing_config::init(arguments.verbose)?;

    let layout = match arguments.layout.as_deref() {
        Some(path) => bench_runner::Layout::try_from_path(path)?,
        None => bench_runner::Layout::default(),
    };
    tracing::debug!(?layout, "layout loaded");

    let mut summary = bench_runner::Summary::new(arguments.quiet);
    summary.status(
        "Starting".bright_green().bold(),
        format!(
            "{} v{}",
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION")
        ),
    );

    let orchestrator = bench_runner::Orchestrator::new(
        layout,
        arguments.workflow,
        arguments.variants(),
        arguments.request(),
    );

    let run_time_start = Instant::now();
    let outcome = orchestrator.run(
        &mut bench_runner::PromptConfirmation::terminal(),
        &mut bench_runner::ProcessRunner,
        &mut summary,
    )?;

    match outcome {
        bench_runner::Outcome::Completed => {
            print!("{summary}");
            if !summary.is_successful() {
                summary.warning("Some commands failed, their results may be missing");
            }
            summary.status(
                "Finished".bright_green().bold(),
                format!(
                    "{} invocations in {}s",
                    summary.invocations(),
                    run_time_start.elapsed().as_secs()
                ),
            );
        }
        bench_runner::Outcome::Aborted => {
            summary.status("Exiting".bright_yellow().bold(), "on user request");
        }
    }

    Ok(())
}
