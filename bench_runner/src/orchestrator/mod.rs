//!
//! The benchmark orchestrator.
//!


use crate::build::Build;
use crate::confirmation::Confirmation;
use crate::layout::Layout;
use crate::request::RunRequest;
use crate::runner::CommandRunner;
use crate::summary::Summary;
use crate::sweep::outcome::Outcome;
use crate::sweep::Sweep;
use crate::variant::Variant;
use crate::workflow::Workflow;

///
/// The benchmark orchestrator.
///
/// Builds the executables once, then sweeps every selected variant in turn.
///
#[derive(Debug, Clone)]
pub struct Orchestrator {
    /// The project layout.
    layout: Layout,
    /// The actions to perform.
    workflow: Workflow,
    /// The variants to run, in the canonical order.
    variants: Vec<Variant>,
    /// The request shared by all variants.
    request: RunRequest,
}

impl Orchestrator {
    ///
    /// A shortcut constructor.
    ///
    /// The variants are deduplicated and run Vulkan first.
    ///
    pub fn new(
        layout: Layout,
        workflow: Workflow,
        mut variants: Vec<Variant>,
        request: RunRequest,
    ) -> Self {
        variants.sort();
        variants.dedup();
        Self {
            layout,
            workflow,
            variants,
            request,
        }
    }

    ///
    /// Runs the build and the benchmarks.
    ///
    /// A refused overwrite stops everything, including the variants not started yet.
    ///
    pub fn run(
        &self,
        confirmation: &mut dyn Confirmation,
        runner: &mut dyn CommandRunner,
        summary: &mut Summary,
    ) -> anyhow::Result<Outcome> {
        Build::new(&self.layout)?.run(runner, summary);

        if let Workflow::BuildOnly = self.workflow {
            return Ok(Outcome::Completed);
        }
        if self.variants.is_empty() {
            tracing::info!("no benchmark variant selected");
        }

        for variant in self.variants.iter().copied() {
            let request = self.request.for_variant(variant);
            if let Outcome::Aborted =
                Sweep::run(&request, &self.layout, confirmation, runner, summary)?
            {
                return Ok(Outcome::Aborted);
            }
        }

        Ok(Outcome::Completed)
    }
}
