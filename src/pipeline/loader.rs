//! Document loader for tab-delimited files

use std::path::Path;

use tracing::{debug, warn};

use super::decode::decode_latin1;
use super::error::Result;
use super::record::Record;

/// Field separator. Tabs are always literal separators; there is no quoting.
pub const DELIMITER: char = '\t';

/// One input line split into fields.
pub type Row = Vec<String>;

/// Every row of one input file, header first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    rows: Vec<Row>,
}

impl Document {
    /// Parse decoded text into rows.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. An empty line becomes a row
    /// with no fields.
    pub fn parse(text: &str) -> Self {
        let rows = split_lines(text).into_iter().map(split_fields).collect();
        Self { rows }
    }

    /// All rows, including the header and empty lines.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Non-empty rows after the header.
    pub fn data_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().skip(1).filter(|row| !row.is_empty())
    }

    /// Zip each non-empty data row with the header.
    ///
    /// The header itself is not a record, and empty lines are skipped.
    pub fn records(&self) -> Vec<Record> {
        let Some(header) = self.header() else {
            return Vec::new();
        };

        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, row)| !row.is_empty())
            .map(|(index, row)| {
                if row.len() != header.len() {
                    warn!(
                        line = index + 1,
                        fields = row.len(),
                        header_fields = header.len(),
                        "row width differs from header"
                    );
                }
                Record::from_row(header, row)
            })
            .collect()
    }
}

/// Read and decode a tab-delimited file into a [`Document`].
///
/// The whole file is read into memory; decoding cannot fail, so the only
/// error is an I/O error on the input.
pub fn load_document(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path)?;
    let document = Document::parse(&decode_latin1(&bytes));
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        lines = document.line_count(),
        "loaded document"
    );
    Ok(document)
}

fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn split_fields(line: &str) -> Row {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(DELIMITER).map(str::to_owned).collect()
}
