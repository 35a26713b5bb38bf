//! CLI module - argument parsing and the conversion command

mod args;
pub mod convert;

pub use args::{Cli, Invocation, USAGE};
pub use convert::{run, run_convert, Outcome};
