//! bledata - Bluetooth LE Characteristic Value Inspector
//!
//! Command-line front end for [`ble_data::Data`]. Values are passed as hex
//! text, the same text a sniffer or a mobile BLE scanner shows, and every
//! subcommand prints the result in the `(0x) AB-CD` display form or as
//! decoded numbers.
//!
//! # Subcommands
//!
//! - **show**: print a value and its length
//! - **read**: read one integer or float at an offset
//! - **write-int** / **write-float**: encode a number into a value
//! - **decode**: decode every field of a value using a YAML layout file
//!
//! # Example
//!
//! ```text
//! $ bledata read 6D0100FF --format float --offset 0
//! 36.5
//! $ bledata write-int --format sint16 --offset 2 --value -2
//! (0x) 00-00-FE-FF
//! ```

pub mod cli;
pub mod commands;
mod error;
pub mod layout;
pub mod logging;

pub use cli::{Cli, Command};
pub use commands::run;
pub use error::*;
pub use layout::{DecodedField, FieldSpec, FieldValue, Layout};
