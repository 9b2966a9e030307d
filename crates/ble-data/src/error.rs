//! Error types for ble-data.

use thiserror::Error;

/// Errors that can occur while building a [`Data`](crate::Data) or a
/// [`FormatType`](crate::FormatType) from external input.
///
/// Reads and writes on an existing `Data` never fail with an error; they
/// return `None` or `false` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Numeric code is not one of the eight format types.
    #[error("unknown format type: 0x{0:02X}")]
    UnknownFormat(u8),

    /// Name is not one of the eight format types.
    #[error("unknown format type name: {0:?}")]
    UnknownFormatName(String),

    /// Text could not be parsed as hex bytes.
    #[error("invalid hex data: {0}")]
    InvalidHex(String),
}

impl DataError {
    /// Create an invalid hex error.
    pub fn invalid_hex(message: impl Into<String>) -> Self {
        DataError::InvalidHex(message.into())
    }
}

/// Result type alias for ble-data operations.
pub type DataResult<T> = Result<T, DataError>;
