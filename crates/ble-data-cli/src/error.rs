//! Error types for the bledata CLI.

use ble_data::{DataError, FormatType};
use thiserror::Error;

/// Errors that can occur while running a bledata command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad hex value or format type.
    #[error(transparent)]
    Data(#[from] DataError),

    /// I/O error reading a layout file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Layout file is not valid YAML for a layout.
    #[error("invalid layout: {0}")]
    Layout(#[from] serde_yaml::Error),

    /// Failed to render JSON output.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Requested value does not fit in the buffer.
    #[error("no value: {format} at offset {offset} does not fit in {len} bytes")]
    NoValue {
        /// Requested format.
        format: FormatType,
        /// Requested offset.
        offset: usize,
        /// Length of the value.
        len: usize,
    },

    /// Write was refused by the buffer.
    #[error("{format} write at offset {offset} rejected: value is {len} bytes")]
    WriteRejected {
        /// Requested format.
        format: FormatType,
        /// Requested offset.
        offset: usize,
        /// Length of the value.
        len: usize,
    },

    /// Logging could not be set up.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
