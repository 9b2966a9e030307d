//! Field layouts for decoding whole characteristic values.
//!
//! A layout is a YAML list of named fields. A field without an `offset`
//! starts right after the previous one, which covers the common case of
//! packed measurement records:
//!
//! ```yaml
//! fields:
//!   - name: flags
//!     format: uint8
//!   - name: temperature
//!     format: float
//!   - name: sensor_id
//!     format: uint16
//!     offset: 7
//! ```

use std::fmt;
use std::path::Path;

use ble_data::{Data, FormatType};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// One named field of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name.
    pub name: String,
    /// Value format.
    pub format: FormatType,
    /// Byte offset; defaults to the end of the previous field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

/// An ordered list of fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Fields in decode order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl Layout {
    /// Parse a layout from YAML text.
    pub fn from_yaml_str(yaml: &str) -> CliResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a layout from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Fields paired with their resolved offsets.
    pub fn resolved(&self) -> Vec<(&FieldSpec, usize)> {
        let mut next = 0usize;
        self.fields
            .iter()
            .map(|field| {
                let offset = field.offset.unwrap_or(next);
                next = offset.saturating_add(field.format.width());
                (field, offset)
            })
            .collect()
    }

    /// Decode every field of `data`. Fields that do not fit decode to `None`.
    pub fn decode(&self, data: &Data) -> Vec<DecodedField> {
        self.resolved()
            .into_iter()
            .map(|(field, offset)| {
                let value = FieldValue::read(data, field.format, offset);
                if value.is_none() {
                    tracing::debug!(
                        field = %field.name,
                        format = %field.format,
                        offset,
                        len = data.len(),
                        "field does not fit"
                    );
                }
                DecodedField {
                    name: field.name.clone(),
                    format: field.format,
                    offset,
                    value,
                }
            })
            .collect()
    }
}

/// A number read from a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Result of an integer format.
    Integer(i64),
    /// Result of SFLOAT or FLOAT.
    Float(f32),
}

impl FieldValue {
    /// Read a value of any format at `offset`.
    pub fn read(data: &Data, format: FormatType, offset: usize) -> Option<Self> {
        if format.is_float() {
            data.float_at(format, offset).map(FieldValue::Float)
        } else {
            data.integer_at(format, offset).map(FieldValue::Integer)
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// A decoded field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedField {
    /// Field name.
    pub name: String,
    /// Value format.
    pub format: FormatType,
    /// Resolved byte offset.
    pub offset: usize,
    /// Decoded value, or `None` when the field does not fit.
    pub value: Option<FieldValue>,
}

impl fmt::Display for DecodedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} @ {}): ", self.name, self.format, self.offset)?;
        match self.value {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("no value"),
        }
    }
}
