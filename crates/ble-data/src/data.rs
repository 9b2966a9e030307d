//! Typed access to a characteristic value.
//!
//! ## Float Layouts
//!
//! ```text
//! SFLOAT (2 bytes)
//! +----------+-----------------+-----------------+
//! | b0       | b1 low nibble   | b1 high nibble  |
//! +----------+-----------------+-----------------+
//! | mantissa (12 bits, signed) | exponent (4 b)  |
//! +----------------------------+-----------------+
//!
//! FLOAT (4 bytes)
//! +----------+----------+----------+----------+
//! | b0       | b1       | b2       | b3       |
//! +----------+----------+----------+----------+
//! | mantissa (24 bits, signed)     | exponent |
//! +--------------------------------+----------+
//! ```

use std::fmt;

use crate::constants::*;
use crate::error::{DataError, DataResult};
use crate::format::FormatType;
use crate::twos::{to_signed, to_unsigned_bits};

/// The value of a characteristic or descriptor, with typed accessors.
///
/// A zero-length `Data` stands for a value that has not been set yet: the
/// first [`write_integer`](Data::write_integer) or
/// [`write_float`](Data::write_float) into it allocates a zero-filled buffer
/// just large enough for the write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Data {
    value: Vec<u8>,
}

impl Data {
    /// Wrap a received value.
    pub fn new(value: Vec<u8>) -> Self {
        Data { value }
    }

    /// Create a value with no bytes yet.
    pub fn empty() -> Self {
        Data::default()
    }

    /// Parse a value from hex text.
    ///
    /// Accepts plain hex (`"1234"`), an optional `0x` prefix, groups separated
    /// by `-`, `:` or whitespace, and the [`Display`](fmt::Display) form of
    /// `Data` itself (`"(0x) 12-34"`, `"empty data"`). Every group between
    /// separators must be a non-empty, whole number of bytes.
    pub fn from_hex(text: &str) -> DataResult<Self> {
        let text = text.trim();
        if text.is_empty() || text == EMPTY_DATA {
            return Ok(Data::empty());
        }

        let text = text.strip_prefix(HEX_PREFIX).unwrap_or(text);
        let text = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);

        let mut value = Vec::new();
        for group in text.split_whitespace().flat_map(|word| word.split(['-', ':'])) {
            if group.is_empty() || group.len() % 2 != 0 {
                return Err(DataError::invalid_hex(format!(
                    "{:?}: group {:?} is not a whole number of bytes",
                    text, group
                )));
            }
            let bytes = hex::decode(group)
                .map_err(|e| DataError::invalid_hex(format!("{:?}: {}", text, e)))?;
            value.extend_from_slice(&bytes);
        }
        Ok(Data::new(value))
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }

    /// Copy the underlying bytes out.
    pub fn to_vec(&self) -> Vec<u8> {
        self.value.clone()
    }

    /// Take the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.value
    }

    /// Length of the value in bytes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Check if the value has no bytes.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns the byte at `offset`, or `None` if `offset` is past the end.
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.value.get(offset).copied()
    }

    /// Returns an integer value read at `offset`.
    ///
    /// `format` determines how many bytes are read and whether they are
    /// interpreted as two's-complement. Returns `None` for the float formats
    /// and when the value does not fit before the end of the buffer.
    pub fn integer_at(&self, format: FormatType, offset: usize) -> Option<i64> {
        let bytes = self.field(format, offset)?;
        if !format.is_integer() {
            return None;
        }

        let unsigned = bytes
            .iter()
            .rev()
            .fold(0i64, |acc, &b| (acc << 8) | i64::from(b));

        if format.is_signed() {
            Some(to_signed(unsigned, format.bits()))
        } else {
            Some(unsigned)
        }
    }

    /// Returns an SFLOAT or FLOAT value read at `offset`.
    ///
    /// Returns `None` for the integer formats and when the value does not fit
    /// before the end of the buffer.
    pub fn float_at(&self, format: FormatType, offset: usize) -> Option<f32> {
        match (format, self.field(format, offset)?) {
            (FormatType::Sfloat, &[b0, b1]) => Some(sfloat_to_f32(b0, b1)),
            (FormatType::Float, &[b0, b1, b2, b3]) => Some(float_to_f32(b0, b1, b2, b3)),
            _ => None,
        }
    }

    /// Replace the whole value. Always succeeds.
    pub fn replace(&mut self, value: Vec<u8>) -> bool {
        self.value = value;
        true
    }

    /// Store an integer at `offset` using `format`.
    ///
    /// Signed formats store the two's-complement bit pattern of `value`;
    /// bits above the format width are dropped. Returns `false`, leaving the
    /// value untouched, for the float formats and when the buffer is non-empty
    /// but too short.
    pub fn write_integer(&mut self, value: i64, format: FormatType, offset: usize) -> bool {
        if !format.is_integer() {
            log::trace!("write_integer: {} is not an integer format", format);
            return false;
        }

        let bits = if format.is_signed() {
            to_unsigned_bits(value, format.bits())
        } else {
            value
        };

        let Some(field) = self.field_mut(format, offset) else {
            return false;
        };
        for (i, byte) in field.iter_mut().enumerate() {
            *byte = (bits >> (8 * i)) as u8;
        }
        true
    }

    /// Store a `mantissa * 10^exponent` float at `offset` using `format`.
    ///
    /// For FLOAT the exponent byte is added onto whatever the fourth byte
    /// already holds. Returns `false`, leaving the value untouched, for the
    /// integer formats and when the buffer is non-empty but too short.
    pub fn write_float(
        &mut self,
        mantissa: i32,
        exponent: i32,
        format: FormatType,
        offset: usize,
    ) -> bool {
        if !format.is_float() {
            log::trace!("write_float: {} is not a float format", format);
            return false;
        }

        let Some(field) = self.field_mut(format, offset) else {
            return false;
        };

        match (format, field) {
            (FormatType::Sfloat, [b0, b1]) => {
                let mantissa = to_unsigned_bits(i64::from(mantissa), SFLOAT_MANTISSA_BITS);
                let exponent = to_unsigned_bits(i64::from(exponent), SFLOAT_EXPONENT_BITS);
                *b0 = (mantissa & 0xFF) as u8;
                *b1 = ((mantissa >> 8) & 0x0F) as u8;
                *b1 = b1.wrapping_add(((exponent & 0x0F) << 4) as u8);
            }
            (FormatType::Float, [b0, b1, b2, b3]) => {
                let mantissa = to_unsigned_bits(i64::from(mantissa), FLOAT_MANTISSA_BITS);
                let exponent = to_unsigned_bits(i64::from(exponent), FLOAT_EXPONENT_BITS);
                *b0 = (mantissa & 0xFF) as u8;
                *b1 = ((mantissa >> 8) & 0xFF) as u8;
                *b2 = ((mantissa >> 16) & 0xFF) as u8;
                *b3 = b3.wrapping_add((exponent & 0xFF) as u8);
            }
            _ => return false,
        }
        true
    }

    /// Bytes of the field at `offset`, if the whole field is in bounds.
    fn field(&self, format: FormatType, offset: usize) -> Option<&[u8]> {
        let end = offset.checked_add(format.width())?;
        self.value.get(offset..end)
    }

    /// Mutable bytes of the field at `offset`, allocating an empty value first.
    fn field_mut(&mut self, format: FormatType, offset: usize) -> Option<&mut [u8]> {
        let end = offset.checked_add(format.width())?;
        if self.value.is_empty() {
            let mut value = Vec::new();
            if value.try_reserve_exact(end).is_err() {
                log::trace!("cannot allocate {} bytes for {} at offset {}", end, format, offset);
                return None;
            }
            log::trace!("allocating {} zeroed bytes for {} at offset {}", end, format, offset);
            value.resize(end, 0);
            self.value = value;
        }
        if end > self.value.len() {
            log::trace!(
                "rejected {} write at offset {}: value is only {} bytes",
                format,
                offset,
                self.value.len()
            );
            return None;
        }
        self.value.get_mut(offset..end)
    }
}

/// Decode a 16-bit short float.
fn sfloat_to_f32(b0: u8, b1: u8) -> f32 {
    let mantissa = to_signed(
        i64::from(b0) + (i64::from(b1 & 0x0F) << 8),
        SFLOAT_MANTISSA_BITS,
    );
    let exponent = to_signed(i64::from(b1 >> 4), SFLOAT_EXPONENT_BITS);
    scale(mantissa, exponent as i32)
}

/// Decode a 32-bit float. The exponent byte is read as a plain `i8`.
fn float_to_f32(b0: u8, b1: u8, b2: u8, b3: u8) -> f32 {
    let mantissa = to_signed(
        i64::from(b0) + (i64::from(b1) << 8) + (i64::from(b2) << 16),
        FLOAT_MANTISSA_BITS,
    );
    scale(mantissa, i32::from(b3 as i8))
}

fn scale(mantissa: i64, exponent: i32) -> f32 {
    (mantissa as f64 * 10f64.powi(exponent)) as f32
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            return f.write_str(EMPTY_DATA);
        }

        f.write_str(HEX_PREFIX)?;
        for (i, byte) in self.value.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Data {
    fn as_ref(&self) -> &[u8] {
        &self.value
    }
}

impl From<Vec<u8>> for Data {
    fn from(value: Vec<u8>) -> Self {
        Data::new(value)
    }
}

impl From<&[u8]> for Data {
    fn from(value: &[u8]) -> Self {
        Data::new(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Data {
    fn from(value: [u8; N]) -> Self {
        Data::new(value.to_vec())
    }
}

impl From<Data> for Vec<u8> {
    fn from(data: Data) -> Self {
        data.value
    }
}
