//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `directive` (e.g. `"debug"`) is used.
/// Records from the `log` facade, which `ble-data` logs through, are
/// forwarded to the same subscriber.
pub fn init_logging(directive: &str) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
