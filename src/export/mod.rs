//! Export module - CSV, JSON, and XML serializers over a loaded document

pub mod csv;
pub mod json;
pub mod xml;

use std::io::Write;

use crate::pipeline::{Document, Result};

pub use self::csv::Csv;
pub use self::json::Json;
pub use self::xml::Xml;

/// A serializer writing a whole [`Document`] to any `io::Write`.
pub trait WriteFormat {
    /// Reject documents this format cannot represent, before any output exists.
    fn validate(_doc: &Document) -> Result<()> {
        Ok(())
    }

    fn write<W: Write>(w: W, doc: &Document) -> Result<()>;
}

/// Output format selected by the command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Xml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Xml];

    /// Look up the format for a command-line flag (`-c`, `-j` or `-x`).
    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.flag() == flag)
    }

    pub fn flag(self) -> &'static str {
        match self {
            OutputFormat::Csv => "-c",
            OutputFormat::Json => "-j",
            OutputFormat::Xml => "-x",
        }
    }

    /// Fixed output file name, written to the working directory.
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Csv => "output.csv",
            OutputFormat::Json => "output.json",
            OutputFormat::Xml => "output.xml",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Csv => "CSV",
            OutputFormat::Json => "JSON",
            OutputFormat::Xml => "XML",
        }
    }

    pub fn validate(self, doc: &Document) -> Result<()> {
        match self {
            OutputFormat::Csv => Csv::validate(doc),
            OutputFormat::Json => Json::validate(doc),
            OutputFormat::Xml => Xml::validate(doc),
        }
    }

    pub fn write<W: Write>(self, w: W, doc: &Document) -> Result<()> {
        match self {
            OutputFormat::Csv => Csv::write(w, doc),
            OutputFormat::Json => Json::write(w, doc),
            OutputFormat::Xml => Xml::write(w, doc),
        }
    }
}
