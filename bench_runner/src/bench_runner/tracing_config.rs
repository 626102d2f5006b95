//!
//! The diagnostic logging configuration.
//!

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

///
/// Converts the verbosity level to the tracing filter directive.
///
pub fn verbosity_to_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

///
/// Initializes the global subscriber, writing to stderr.
///
/// `RUST_LOG`, if set, takes precedence over the verbosity level.
///
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(verbosity_to_filter(verbosity))?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    Registry::default().with(filter).with(fmt_layer).try_init()?;
    Ok(())
}
