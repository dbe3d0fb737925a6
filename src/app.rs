//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, argument acquisition, and
//! the error report that support the main entry point.

use std::ffi::OsString;

use render_opts::config::ParseError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Parse error (exit code 255, the `-1` sentinel) - any invalid argument.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn parse_error() -> ExitCode {
        ExitCode::from(255)
    }
}

/// Collects the arguments after the program name.
///
/// # Errors
///
/// Returns the first argument that is not valid UTF-8.
pub fn collect_arguments<I>(args: I) -> Result<Vec<String>, OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter().skip(1).map(OsString::into_string).collect()
}

/// Prints the diagnostic for a failed parse.
///
/// Diagnostics go to stdout, next to the parsed result they replace.
pub fn report(error: &ParseError) {
    tracing::debug!(?error, "parse failed");
    println!("Error: {error}");
}

/// Prints the diagnostic for an argument that is not valid UTF-8.
pub fn report_encoding(argument: &OsString) {
    println!(
        "Error: Argument {} is not valid UTF-8",
        argument.to_string_lossy()
    );
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout only carries the program's output.
pub fn setup_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
