//! Command-line argument definitions.

use std::path::PathBuf;

use ble_data::FormatType;
use clap::{Parser, Subcommand};

/// Inspect and build Bluetooth LE characteristic values.
#[derive(Parser, Debug)]
#[command(name = "bledata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log level (trace, debug, info, warn, error); overrides -v
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log filter directive selected by the flags.
    pub fn log_directive(&self) -> String {
        if let Some(ref level) = self.log_level {
            return level.clone();
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print a value in display form along with its length
    Show {
        /// Value as hex (e.g. "AB-CD", "0xabcd")
        hex: String,
    },

    /// Read one integer or float from a value
    Read {
        /// Value as hex
        hex: String,

        /// Format type name (uint8, sint16, sfloat, ...) or code (0x22)
        #[arg(short, long)]
        format: FormatType,

        /// Byte offset of the field
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },

    /// Encode an integer into a value
    WriteInt {
        /// Existing value as hex; omitted means an empty value
        hex: Option<String>,

        /// Integer format type
        #[arg(short, long)]
        format: FormatType,

        /// Byte offset of the field
        #[arg(short, long, default_value = "0")]
        offset: usize,

        /// Integer to store
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },

    /// Encode a mantissa * 10^exponent float into a value
    WriteFloat {
        /// Existing value as hex; omitted means an empty value
        hex: Option<String>,

        /// Float format type (sfloat or float)
        #[arg(short, long)]
        format: FormatType,

        /// Byte offset of the field
        #[arg(short, long, default_value = "0")]
        offset: usize,

        /// Signed mantissa
        #[arg(short, long, allow_negative_numbers = true)]
        mantissa: i32,

        /// Signed base-10 exponent
        #[arg(short, long, allow_negative_numbers = true)]
        exponent: i32,
    },

    /// Decode every field of a value using a YAML layout file
    Decode {
        /// Value as hex
        hex: String,

        /// Layout file (YAML)
        #[arg(short, long)]
        layout: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_read() {
        let cli = Cli::try_parse_from(["bledata", "read", "1234", "--format", "uint16", "--offset", "0"])
            .unwrap();
        assert_eq!(
            cli.command,
            Command::Read {
                hex: "1234".to_string(),
                format: FormatType::Uint16,
                offset: 0,
            }
        );
    }

    #[test]
    fn test_parse_negative_values() {
        let cli = Cli::try_parse_from([
            "bledata", "write-float", "--format", "float", "--mantissa", "-365", "--exponent", "-1",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::WriteFloat {
                hex: None,
                format: FormatType::Float,
                offset: 0,
                mantissa: -365,
                exponent: -1,
            }
        );

        let cli = Cli::try_parse_from([
            "bledata", "write-int", "00", "--format", "0x21", "--value", "-5",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::WriteInt {
                hex: Some("00".to_string()),
                format: FormatType::Sint8,
                offset: 0,
                value: -5,
            }
        );
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Cli::try_parse_from(["bledata", "read", "00", "--format", "int7"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_directive() {
        let cli = Cli::try_parse_from(["bledata", "show", "00"]).unwrap();
        assert_eq!(cli.log_directive(), "warn");

        let cli = Cli::try_parse_from(["bledata", "-vv", "show", "00"]).unwrap();
        assert_eq!(cli.log_directive(), "debug");

        let cli = Cli::try_parse_from(["bledata", "-v", "--log-level", "trace", "show", "00"]).unwrap();
        assert_eq!(cli.log_directive(), "trace");
    }
}
