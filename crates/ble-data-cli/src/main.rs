//! bledata - inspect and build Bluetooth LE characteristic values.

use ble_data_cli::{logging, run, Cli};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(&cli.log_directive()) {
        eprintln!("warning: {}", e);
    }

    match run(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
