//! Characteristic value format types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{DataError, DataResult};

/// Kind of value a format type describes (the high nibble of its code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Unsigned little-endian integer.
    Unsigned,
    /// Two's-complement little-endian integer.
    Signed,
    /// `mantissa * 10^exponent` packed float.
    Float,
}

/// Format of a value stored in a characteristic.
///
/// The discriminant is the on-the-wire code: high nibble = kind,
/// low nibble = width in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum FormatType {
    /// Unsigned 8-bit integer.
    Uint8 = FORMAT_UINT8,
    /// Unsigned 16-bit integer.
    Uint16 = FORMAT_UINT16,
    /// Unsigned 32-bit integer.
    Uint32 = FORMAT_UINT32,
    /// Signed 8-bit integer.
    Sint8 = FORMAT_SINT8,
    /// Signed 16-bit integer.
    Sint16 = FORMAT_SINT16,
    /// Signed 32-bit integer.
    Sint32 = FORMAT_SINT32,
    /// 16-bit short float: 12-bit mantissa, 4-bit exponent.
    Sfloat = FORMAT_SFLOAT,
    /// 32-bit float: 24-bit mantissa, 8-bit exponent.
    Float = FORMAT_FLOAT,
}

impl FormatType {
    /// All format types, in code order.
    pub const ALL: [FormatType; 8] = [
        FormatType::Uint8,
        FormatType::Uint16,
        FormatType::Uint32,
        FormatType::Sint8,
        FormatType::Sint16,
        FormatType::Sint32,
        FormatType::Sfloat,
        FormatType::Float,
    ];

    /// The six integer format types.
    pub const INTEGERS: [FormatType; 6] = [
        FormatType::Uint8,
        FormatType::Uint16,
        FormatType::Uint32,
        FormatType::Sint8,
        FormatType::Sint16,
        FormatType::Sint32,
    ];

    /// Get the numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Width of the encoded value in bytes.
    pub fn width(self) -> usize {
        (self.code() & 0x0F) as usize
    }

    /// Width of the encoded value in bits.
    pub fn bits(self) -> u32 {
        self.width() as u32 * 8
    }

    /// Get the value kind.
    pub fn kind(self) -> FormatKind {
        match self.code() >> 4 {
            KIND_UNSIGNED => FormatKind::Unsigned,
            KIND_SIGNED => FormatKind::Signed,
            _ => FormatKind::Float,
        }
    }

    /// Check if this is one of the six integer formats.
    pub fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Check if this is SFLOAT or FLOAT.
    pub fn is_float(self) -> bool {
        self.kind() == FormatKind::Float
    }

    /// Check if this is a signed integer format.
    pub fn is_signed(self) -> bool {
        self.kind() == FormatKind::Signed
    }

    /// Lowercase name, as used in layout files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            FormatType::Uint8 => "uint8",
            FormatType::Uint16 => "uint16",
            FormatType::Uint32 => "uint32",
            FormatType::Sint8 => "sint8",
            FormatType::Sint16 => "sint16",
            FormatType::Sint32 => "sint32",
            FormatType::Sfloat => "sfloat",
            FormatType::Float => "float",
        }
    }
}

impl TryFrom<u8> for FormatType {
    type Error = DataError;

    fn try_from(code: u8) -> DataResult<Self> {
        match code {
            FORMAT_UINT8 => Ok(FormatType::Uint8),
            FORMAT_UINT16 => Ok(FormatType::Uint16),
            FORMAT_UINT32 => Ok(FormatType::Uint32),
            FORMAT_SINT8 => Ok(FormatType::Sint8),
            FORMAT_SINT16 => Ok(FormatType::Sint16),
            FORMAT_SINT32 => Ok(FormatType::Sint32),
            FORMAT_SFLOAT => Ok(FormatType::Sfloat),
            FORMAT_FLOAT => Ok(FormatType::Float),
            _ => Err(DataError::UnknownFormat(code)),
        }
    }
}

impl From<FormatType> for u8 {
    fn from(format: FormatType) -> Self {
        format.code()
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatType {
    type Err = DataError;

    /// Parse a lowercase name (`"sint16"`) or a hex code (`"0x22"`).
    fn from_str(s: &str) -> DataResult<Self> {
        let s = s.trim();
        if let Some(code) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            let code = u8::from_str_radix(code, 16)
                .map_err(|_| DataError::UnknownFormatName(s.to_string()))?;
            return FormatType::try_from(code);
        }

        FormatType::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DataError::UnknownFormatName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for format in FormatType::ALL {
            assert_eq!(FormatType::try_from(format.code()), Ok(format));
            assert_eq!(u8::from(format), format.code());
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(FormatType::try_from(0x13), Err(DataError::UnknownFormat(0x13)));
        assert_eq!(FormatType::try_from(0x00), Err(DataError::UnknownFormat(0x00)));
        assert_eq!(FormatType::try_from(0x31), Err(DataError::UnknownFormat(0x31)));
    }

    #[test]
    fn test_width_and_kind() {
        assert_eq!(FormatType::Uint8.width(), 1);
        assert_eq!(FormatType::Sint16.width(), 2);
        assert_eq!(FormatType::Uint32.width(), 4);
        assert_eq!(FormatType::Sfloat.width(), 2);
        assert_eq!(FormatType::Float.width(), 4);
        assert_eq!(FormatType::Sint32.bits(), 32);

        assert_eq!(FormatType::Uint16.kind(), FormatKind::Unsigned);
        assert_eq!(FormatType::Sint8.kind(), FormatKind::Signed);
        assert_eq!(FormatType::Float.kind(), FormatKind::Float);

        assert!(FormatType::Sint32.is_signed());
        assert!(!FormatType::Uint32.is_signed());
        assert!(FormatType::Sfloat.is_float());
        assert_eq!(
            FormatType::ALL.iter().filter(|f| f.is_integer()).count(),
            FormatType::INTEGERS.len()
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("uint16".parse::<FormatType>(), Ok(FormatType::Uint16));
        assert_eq!("SFLOAT".parse::<FormatType>(), Ok(FormatType::Sfloat));
        assert_eq!("0x24".parse::<FormatType>(), Ok(FormatType::Sint32));
        assert_eq!(
            "0x25".parse::<FormatType>(),
            Err(DataError::UnknownFormat(0x25))
        );
        assert!(matches!(
            "int16".parse::<FormatType>(),
            Err(DataError::UnknownFormatName(_))
        ));
    }

    #[test]
    fn test_display_matches_parse() {
        for format in FormatType::ALL {
            assert_eq!(format.to_string().parse::<FormatType>(), Ok(format));
        }
    }

    #[test]
    fn test_serde_names() {
        let yaml = serde_yaml::to_string(&FormatType::Sint16).unwrap();
        assert_eq!(yaml.trim(), "sint16");

        let format: FormatType = serde_yaml::from_str("float").unwrap();
        assert_eq!(format, FormatType::Float);
    }
}
