//! Command-line argument definitions using clap

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::export::OutputFormat;

/// Usage line printed when the argument count is wrong.
pub const USAGE: &str = "Usage: tabconv <input_file> <-c|-j|-x>";

/// tabconv - Convert a tab-delimited file to CSV, JSON, or XML
#[derive(Parser, Debug)]
#[command(name = "tabconv")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Tab-delimited input file (first line is the header)
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Output format flag: -c (output.csv), -j (output.json) or -x (output.xml)
    #[arg(allow_hyphen_values = true)]
    pub flag: String,
}

/// What one command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Convert { input: PathBuf, format: OutputFormat },
    /// Wrong number of arguments.
    Usage,
    /// Two arguments, but the second is not a known flag.
    InvalidFlag(String),
}

impl Invocation {
    /// Parse a full argument list, program name first.
    ///
    /// Exactly two arguments must follow the program name. They are handed to
    /// clap after `--`, so either may be any string, `--` included.
    pub fn parse<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 3 {
            debug!(count = args.len().saturating_sub(1), "wrong argument count");
            return Invocation::Usage;
        }
        args.insert(1, OsString::from("--"));

        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) => {
                debug!(kind = ?err.kind(), "argument parsing failed");
                return Invocation::Usage;
            }
        };

        match OutputFormat::from_flag(&cli.flag) {
            Some(format) => Invocation::Convert {
                input: cli.input,
                format,
            },
            None => Invocation::InvalidFlag(cli.flag),
        }
    }
}
