// File: crates/highlow-service/src/logging.rs
// Summary: tracing subscriber setup driven by the logging section of the config.

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use crate::config::Logging;

/// Install the global subscriber. `RUST_LOG`, when set, wins over the configured levels.
pub fn init_logger(logging: &Logging) -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logging.levels()));
    let subscriber = SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
