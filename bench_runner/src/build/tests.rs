//!
//! The build step tests.
//!

use std::path::PathBuf;

use super::Build;
use crate::layout::Layout;
use crate::runner::command::Command;
use crate::runner::completion::Completion;
use crate::runner::CommandRunner;
use crate::summary::Summary;

#[derive(Default)]
struct Recorder {
    commands: Vec<Command>,
}

impl CommandRunner for Recorder {
    fn run(&mut self, command: &Command) -> Completion {
        self.commands.push(command.clone());
        Completion::Exited(2)
    }
}

#[test]
fn default_command() {
    let build = Build::new(&Layout::default()).expect("Always valid");
    assert_eq!(build.command().program, PathBuf::from("make"));
    assert_eq!(build.command().arguments, vec!["-j", "4"]);
}

#[test]
fn empty_command() {
    let layout = Layout {
        build_command: Vec::new(),
        ..Layout::default()
    };
    assert!(Build::new(&layout).is_err());
}

#[test]
fn failure_is_recorded() {
    let build = Build::new(&Layout::default()).expect("Always valid");
    let mut runner = Recorder::default();
    let mut summary = Summary::new(true);

    let completion = build.run(&mut runner, &mut summary);

    assert_eq!(completion, Completion::Exited(2));
    assert_eq!(runner.commands.len(), 1);
    assert_eq!(summary.breakdown(), vec![("build".to_owned(), 0, 1)]);
    assert_eq!(summary.invocations(), 0);
    assert!(!summary.is_successful());
}
