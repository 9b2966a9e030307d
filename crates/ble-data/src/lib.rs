//! Bluetooth LE Characteristic Data
//!
//! This crate provides [`Data`], a typed wrapper around the raw value of a
//! Bluetooth LE characteristic or descriptor. The radio layer hands over a
//! flat byte sequence; `Data` reads and writes fixed-width numbers in it.
//!
//! # Value Formats
//!
//! Every accessor takes a [`FormatType`] whose code packs the value kind in
//! the high nibble and the byte width in the low nibble:
//!
//! - **Unsigned integers**: `uint8` (0x11), `uint16` (0x12), `uint32` (0x14)
//! - **Signed integers**: `sint8` (0x21), `sint16` (0x22), `sint32` (0x24)
//! - **Floats**: `sfloat` (0x32, 12-bit mantissa + 4-bit exponent) and
//!   `float` (0x34, 24-bit mantissa + 8-bit exponent), both meaning
//!   `mantissa * 10^exponent`
//!
//! All multi-byte values are little-endian.
//!
//! # Example
//!
//! ```rust
//! use ble_data::{Data, FormatType};
//!
//! let mut data = Data::new(vec![0x12, 0x34]);
//! assert_eq!(data.integer_at(FormatType::Uint16, 0), Some(0x3412));
//!
//! assert!(data.write_integer(-1, FormatType::Sint8, 1));
//! assert_eq!(data.to_string(), "(0x) 12-FF");
//!
//! // Reads past the end yield no value.
//! assert_eq!(data.integer_at(FormatType::Uint32, 0), None);
//! ```

mod constants;
mod data;
mod error;
mod format;
pub mod twos;

pub use constants::*;
pub use data::*;
pub use error::*;
pub use format::*;
