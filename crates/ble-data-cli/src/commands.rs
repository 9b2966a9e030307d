//! Subcommand execution.
//!
//! Every command returns its output as text so `main` decides where it goes.

use ble_data::{Data, FormatType};
use tracing::{debug, info};

use crate::cli::Command;
use crate::error::{CliError, CliResult};
use crate::layout::{FieldValue, Layout};

/// Run a command and return what it prints.
pub fn run(command: &Command) -> CliResult<String> {
    match command {
        Command::Show { hex } => {
            let data = Data::from_hex(hex)?;
            Ok(format!("{}\nlength: {}", data, data.len()))
        }

        Command::Read { hex, format, offset } => {
            let data = Data::from_hex(hex)?;
            debug!(%format, offset, len = data.len(), "reading field");
            read(&data, *format, *offset).map(|value| value.to_string())
        }

        Command::WriteInt {
            hex,
            format,
            offset,
            value,
        } => {
            let mut data = parse_or_empty(hex.as_deref())?;
            debug!(%format, offset, value, "writing integer");
            if !data.write_integer(*value, *format, *offset) {
                return Err(rejected(&data, *format, *offset));
            }
            Ok(data.to_string())
        }

        Command::WriteFloat {
            hex,
            format,
            offset,
            mantissa,
            exponent,
        } => {
            let mut data = parse_or_empty(hex.as_deref())?;
            debug!(%format, offset, mantissa, exponent, "writing float");
            if !data.write_float(*mantissa, *exponent, *format, *offset) {
                return Err(rejected(&data, *format, *offset));
            }
            Ok(data.to_string())
        }

        Command::Decode { hex, layout, json } => {
            let data = Data::from_hex(hex)?;
            info!("Loading layout from {:?}", layout);
            let layout = Layout::from_file(layout)?;
            let decoded = layout.decode(&data);

            if *json {
                Ok(serde_json::to_string_pretty(&decoded)?)
            } else {
                Ok(decoded
                    .iter()
                    .map(|field| field.to_string())
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }
}

/// Read a single value, turning absence into an error.
fn read(data: &Data, format: FormatType, offset: usize) -> CliResult<FieldValue> {
    FieldValue::read(data, format, offset).ok_or(CliError::NoValue {
        format,
        offset,
        len: data.len(),
    })
}

fn parse_or_empty(hex: Option<&str>) -> CliResult<Data> {
    match hex {
        Some(hex) => Ok(Data::from_hex(hex)?),
        None => Ok(Data::empty()),
    }
}

fn rejected(data: &Data, format: FormatType, offset: usize) -> CliError {
    CliError::WriteRejected {
        format,
        offset,
        len: data.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_cmd(hex: &str, format: FormatType, offset: usize) -> Command {
        Command::Read {
            hex: hex.to_string(),
            format,
            offset,
        }
    }

    #[test]
    fn test_show() {
        let out = run(&Command::Show { hex: "abcd".to_string() }).unwrap();
        assert_eq!(out, "(0x) AB-CD\nlength: 2");

        let out = run(&Command::Show { hex: String::new() }).unwrap();
        assert_eq!(out, "empty data\nlength: 0");
    }

    #[test]
    fn test_read() {
        assert_eq!(run(&read_cmd("1234", FormatType::Uint16, 0)).unwrap(), "13330");
        assert_eq!(run(&read_cmd("FF", FormatType::Sint8, 0)).unwrap(), "-1");
        assert_eq!(run(&read_cmd("0000", FormatType::Sfloat, 0)).unwrap(), "0");
        assert_eq!(run(&read_cmd("6D0100FF", FormatType::Float, 0)).unwrap(), "36.5");
    }

    #[test]
    fn test_read_out_of_bounds() {
        let err = run(&read_cmd("1234", FormatType::Uint32, 0)).unwrap_err();
        assert!(matches!(
            err,
            CliError::NoValue {
                format: FormatType::Uint32,
                offset: 0,
                len: 2
            }
        ));
        assert!(err.to_string().starts_with("no value"));
    }

    #[test]
    fn test_read_bad_hex() {
        let err = run(&read_cmd("12G4", FormatType::Uint16, 0)).unwrap_err();
        assert!(matches!(err, CliError::Data(_)));
    }

    #[test]
    fn test_write_int() {
        let out = run(&Command::WriteInt {
            hex: None,
            format: FormatType::Sint16,
            offset: 2,
            value: -2,
        })
        .unwrap();
        assert_eq!(out, "(0x) 00-00-FE-FF");

        let out = run(&Command::WriteInt {
            hex: Some("AABBCC".to_string()),
            format: FormatType::Uint8,
            offset: 1,
            value: 0x11,
        })
        .unwrap();
        assert_eq!(out, "(0x) AA-11-CC");
    }

    #[test]
    fn test_write_int_rejected() {
        let err = run(&Command::WriteInt {
            hex: Some("AA".to_string()),
            format: FormatType::Uint16,
            offset: 0,
            value: 1,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::WriteRejected { len: 1, .. }));

        let err = run(&Command::WriteInt {
            hex: None,
            format: FormatType::Sfloat,
            offset: 0,
            value: 1,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::WriteRejected { len: 0, .. }));
    }

    #[test]
    fn test_write_float() {
        let out = run(&Command::WriteFloat {
            hex: None,
            format: FormatType::Sfloat,
            offset: 0,
            mantissa: 114,
            exponent: -1,
        })
        .unwrap();
        assert_eq!(out, "(0x) 72-F0");
    }

    #[test]
    fn test_decode_from_file() {
        let path = std::env::temp_dir().join(format!("bledata-layout-{}.yaml", std::process::id()));
        std::fs::write(
            &path,
            "fields:\n  - name: level\n    format: uint8\n  - name: temp\n    format: sfloat\n",
        )
        .unwrap();

        let text = run(&Command::Decode {
            hex: "57".to_string(),
            layout: path.clone(),
            json: false,
        })
        .unwrap();
        assert_eq!(text, "level (uint8 @ 0): 87\ntemp (sfloat @ 1): no value");

        let json = run(&Command::Decode {
            hex: "57".to_string(),
            layout: path.clone(),
            json: true,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["value"], 87);
        assert!(value[1]["value"].is_null());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_decode_missing_layout() {
        let err = run(&Command::Decode {
            hex: "00".to_string(),
            layout: "/nonexistent/bledata-layout.yaml".into(),
            json: false,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
