//! Tab-delimited to CSV/JSON/XML conversion command

use std::ffi::OsString;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::args::{Invocation, USAGE};
use crate::export::OutputFormat;
use crate::pipeline::load_document;

/// Result of one invocation, before it is printed and turned into an exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted { output: PathBuf },
    Usage,
    InvalidFlag { flag: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Message for standard output. A conversion names just the output file.
    pub fn message(&self) -> String {
        match self {
            Outcome::Converted { output } => {
                let name = output.file_name().unwrap_or(output.as_os_str());
                format!(
                    "Conversion complete. Output saved to {}",
                    name.to_string_lossy()
                )
            }
            Outcome::Usage => USAGE.to_string(),
            Outcome::InvalidFlag { flag } => format!(
                "Invalid format flag '{}'. Use -c for CSV, -j for JSON, or -x for XML.",
                flag
            ),
        }
    }
}

/// Parse `args` (program name first) and run the conversion they ask for.
///
/// The output file is written to `out_dir`. Usage problems come back as an
/// [`Outcome`]; read, validation and write failures come back as errors.
pub fn run<I, T>(args: I, out_dir: &Path) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Invocation::parse(args) {
        Invocation::Convert { input, format } => {
            let output = run_convert(&input, format, out_dir)?;
            Ok(Outcome::Converted { output })
        }
        Invocation::Usage => Ok(Outcome::Usage),
        Invocation::InvalidFlag(flag) => Ok(Outcome::InvalidFlag { flag }),
    }
}

/// Convert `input` to `format`, writing the format's fixed file name in `out_dir`.
///
/// Returns the path of the written file. An existing file is overwritten.
/// Nothing is created if the input cannot be read or fails validation.
pub fn run_convert(input: &Path, format: OutputFormat, out_dir: &Path) -> Result<PathBuf> {
    let doc = load_document(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    format
        .validate(&doc)
        .with_context(|| format!("Cannot convert {} to {}", input.display(), format.label()))?;

    let output_path = out_dir.join(format.file_name());
    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;

    format.write(BufWriter::new(file), &doc).with_context(|| {
        format!(
            "Failed to write {} file: {}",
            format.label(),
            output_path.display()
        )
    })?;

    info!(
        input = %input.display(),
        output = %output_path.display(),
        format = format.label(),
        lines = doc.line_count(),
        "conversion complete"
    );
    Ok(output_path)
}
