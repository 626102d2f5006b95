//!
//! The benchmark run orchestrator library.
//!

pub mod build;
pub mod configuration;
pub mod confirmation;
pub mod layout;
pub mod orchestrator;
pub mod request;
pub mod runner;
pub mod summary;
pub mod sweep;
pub mod variant;
pub mod workflow;

pub use self::build::Build;
pub use self::configuration::RunConfiguration;
pub use self::confirmation::AssumeAnswer;
pub use self::confirmation::Confirmation;
pub use self::confirmation::PromptConfirmation;
pub use self::layout::error::Error as LayoutError;
pub use self::layout::Layout;
pub use self::orchestrator::Orchestrator;
pub use self::request::RunRequest;
pub use self::runner::command::Command;
pub use self::runner::completion::Completion;
pub use self::runner::CommandRunner;
pub use self::runner::ProcessRunner;
pub use self::summary::Summary;
pub use self::sweep::outcome::Outcome;
pub use self::sweep::plan::Plan;
pub use self::sweep::Sweep;
pub use self::variant::Variant;
pub use self::workflow::Workflow;
