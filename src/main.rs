//! tabconv: Tab-delimited Conversion CLI Tool
//!
//! `tabconv <input_file> <-c|-j|-x>` writes output.csv, output.json or
//! output.xml to the current directory.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tabconv::cli;
use tabconv::utils::print_outcome;

fn main() -> Result<ExitCode> {
    init_logging();

    let out_dir = std::env::current_dir().context("Failed to resolve the working directory")?;
    let outcome = cli::run(std::env::args_os(), &out_dir)?;

    print_outcome(&outcome);
    Ok(ExitCode::from(outcome.exit_code()))
}

/// Log to stderr, `warn` and above unless RUST_LOG says otherwise
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(console::user_attended_stderr())
        .with_target(false)
        .init();
}
