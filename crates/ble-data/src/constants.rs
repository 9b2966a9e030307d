//! Format type codes
//!
//! Raw codes of the characteristic value formats, for callers that build
//! tags numerically. The high nibble is the value kind and the low nibble is
//! the width in bytes.

// ============================================================================
// Value Kinds (high nibble)
// ============================================================================

/// Kind nibble of the unsigned integer formats.
pub const KIND_UNSIGNED: u8 = 0x1;
/// Kind nibble of the signed integer formats.
pub const KIND_SIGNED: u8 = 0x2;
/// Kind nibble of the floating point formats.
pub const KIND_FLOAT: u8 = 0x3;

// ============================================================================
// Format Codes
// ============================================================================

/// Characteristic value format type uint8.
pub const FORMAT_UINT8: u8 = 0x11;
/// Characteristic value format type uint16.
pub const FORMAT_UINT16: u8 = 0x12;
/// Characteristic value format type uint32.
pub const FORMAT_UINT32: u8 = 0x14;
/// Characteristic value format type sint8.
pub const FORMAT_SINT8: u8 = 0x21;
/// Characteristic value format type sint16.
pub const FORMAT_SINT16: u8 = 0x22;
/// Characteristic value format type sint32.
pub const FORMAT_SINT32: u8 = 0x24;
/// Characteristic value format type sfloat (16-bit float).
pub const FORMAT_SFLOAT: u8 = 0x32;
/// Characteristic value format type float (32-bit float).
pub const FORMAT_FLOAT: u8 = 0x34;

// ============================================================================
// Float Field Widths (bits)
// ============================================================================

/// Mantissa width of the SFLOAT format.
pub const SFLOAT_MANTISSA_BITS: u32 = 12;
/// Exponent width of the SFLOAT format.
pub const SFLOAT_EXPONENT_BITS: u32 = 4;
/// Mantissa width of the FLOAT format.
pub const FLOAT_MANTISSA_BITS: u32 = 24;
/// Exponent width of the FLOAT format.
pub const FLOAT_EXPONENT_BITS: u32 = 8;

// ============================================================================
// Display
// ============================================================================

/// Display form of a zero-length value.
pub const EMPTY_DATA: &str = "empty data";
/// Prefix of the display form of a non-empty value.
pub const HEX_PREFIX: &str = "(0x) ";
