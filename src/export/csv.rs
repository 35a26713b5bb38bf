//! CSV output: every row, header included, comma-separated with CRLF endings

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use super::WriteFormat;
use crate::pipeline::{Document, Result};

const CRLF: &[u8] = b"\r\n";

pub struct Csv;

impl WriteFormat for Csv {
    fn write<W: Write>(mut w: W, doc: &Document) -> Result<()> {
        let mut builder = WriterBuilder::new();
        builder
            .flexible(true)
            .terminator(Terminator::CRLF)
            .quote_style(QuoteStyle::Necessary);

        // csv writes an empty record as `""`, so blank lines bypass the writer
        // and go straight to the sink between runs of non-blank rows.
        for (i, run) in doc.rows().split(|row| row.is_empty()).enumerate() {
            if i > 0 {
                w.write_all(CRLF)?;
            }
            if run.is_empty() {
                continue;
            }

            let mut wrt = builder.from_writer(&mut w);
            for row in run {
                wrt.write_record(row)?;
            }
            wrt.flush()?;
        }

        w.flush()?;
        debug!(rows = doc.line_count(), "wrote CSV");
        Ok(())
    }
}
