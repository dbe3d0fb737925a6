//! render-opts: command-line options for the renderer
//!
//! Entry point: parses the arguments and prints the resulting configuration.

use render_opts::config::Configuration;
use std::process::ExitCode;

mod app;

use app::{collect_arguments, exit_code, report, report_encoding, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    setup_tracing();

    let args = match collect_arguments(std::env::args_os()) {
        Ok(args) => args,
        Err(argument) => {
            report_encoding(&argument);
            return exit_code::parse_error();
        }
    };

    match Configuration::parse_from_iter(args) {
        Ok(config) => {
            print!("Parsed options: {config}");
            exit_code::SUCCESS
        }
        Err(e) => {
            report(&e);
            exit_code::parse_error()
        }
    }
}
