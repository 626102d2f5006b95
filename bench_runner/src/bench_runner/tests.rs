//!
//! Tests for the benchmark orchestrator command line.
//!

#![cfg(test)]

use clap::Parser;

use crate::arguments::Arguments;
use crate::tracing_config;

#[test]
fn defaults() {
    let arguments = Arguments::try_parse_from(["bench-runner"]).expect("Always valid");
    assert!(arguments.variants().is_empty());
    assert_eq!(arguments.workflow, bench_runner::Workflow::BuildAndRun);

    let request = arguments.request();
    assert!(!request.debug);
    assert_eq!(request.threads, None);
    assert_eq!(request.times, 1);
    assert_eq!(request.frames, None);
    assert_eq!(request.cubes, 40000);
    assert_eq!(request.file, "time.csv");
}

#[test]
fn all_options() {
    let arguments = Arguments::try_parse_from([
        "bench-runner",
        "--gl",
        "--vulkan",
        "-d",
        "--num_cubes",
        "400",
        "--num_frames",
        "10",
        "--file",
        "run.csv",
        "--num_times",
        "3",
        "--num_threads",
        "2",
        "--workflow",
        "build",
    ])
    .expect("Always valid");
    assert_eq!(
        arguments.variants(),
        vec![bench_runner::Variant::Vulkan, bench_runner::Variant::Gl]
    );
    assert_eq!(arguments.workflow, bench_runner::Workflow::BuildOnly);

    let request = arguments.request();
    assert!(request.debug);
    assert_eq!(request.threads, Some(2));
    assert_eq!(request.times, 3);
    assert_eq!(request.frames, Some(10));
    assert_eq!(request.cubes, 400);
    assert_eq!(request.file, "run.csv");
}

#[test]
fn zero_threads_sweeps() {
    let arguments = Arguments::try_parse_from(["bench-runner", "--num_threads", "0"])
        .expect("Always valid");
    assert_eq!(arguments.request().threads, None);
}

#[test]
fn unknown_workflow() {
    assert!(Arguments::try_parse_from(["bench-runner", "--workflow", "test"]).is_err());
}

#[test]
fn verbose_and_quiet() {
    let arguments =
        Arguments::try_parse_from(["bench-runner", "-vv", "-q"]).expect("Always valid");
    assert_eq!(arguments.verbose, 2);
    assert!(arguments.validate().is_err());
}

#[test]
fn verbosity_filters() {
    assert_eq!(tracing_config::verbosity_to_filter(0), "warn");
    assert_eq!(tracing_config::verbosity_to_filter(1), "info");
    assert_eq!(tracing_config::verbosity_to_filter(2), "debug");
    assert_eq!(tracing_config::verbosity_to_filter(7), "trace");
}
