//! XML output: `<root>` holding one `<item>` per record, one child element per field
//!
//! Header fields become element names as-is, so every emitted name is checked
//! against the XML `Name` production before anything is written.

use std::io::Write;

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::debug;

use super::WriteFormat;
use crate::pipeline::{ConvertError, Document, Result};

pub const ROOT_ELEMENT: &str = "root";
pub const ITEM_ELEMENT: &str = "item";

pub struct Xml;

impl WriteFormat for Xml {
    /// Only header fields some data row reaches become elements, so only those are checked.
    fn validate(doc: &Document) -> Result<()> {
        let Some(header) = doc.header() else {
            return Ok(());
        };
        let width = doc.data_rows().map(Vec::len).max().unwrap_or(0);

        match header.iter().take(width).find(|name| !is_valid_name(name)) {
            Some(name) => Err(ConvertError::InvalidElementName { name: name.clone() }),
            None => Ok(()),
        }
    }

    fn write<W: Write>(mut w: W, doc: &Document) -> Result<()> {
        Self::validate(doc)?;
        let records = doc.records();
        let mut writer = Writer::new(&mut w);

        if records.is_empty() {
            writer
                .write_event(Event::Empty(BytesStart::new(ROOT_ELEMENT)))
                .map_err(xml)?;
        } else {
            writer
                .write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))
                .map_err(xml)?;

            for record in &records {
                if record.is_empty() {
                    writer
                        .write_event(Event::Empty(BytesStart::new(ITEM_ELEMENT)))
                        .map_err(xml)?;
                    continue;
                }

                writer
                    .write_event(Event::Start(BytesStart::new(ITEM_ELEMENT)))
                    .map_err(xml)?;
                for (name, value) in record.iter() {
                    write_field(&mut writer, name, value)?;
                }
                writer
                    .write_event(Event::End(BytesEnd::new(ITEM_ELEMENT)))
                    .map_err(xml)?;
            }

            writer
                .write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))
                .map_err(xml)?;
        }

        w.flush()?;
        debug!(records = records.len(), "wrote XML");
        Ok(())
    }
}

fn write_field<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(xml)?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml)?;
    // Only &, < and > need escaping in text content
    writer
        .write_event(Event::Text(BytesText::from_escaped(partial_escape(value))))
        .map_err(xml)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml)?;
    Ok(())
}

fn xml<E: std::fmt::Display>(e: E) -> ConvertError {
    ConvertError::Xml(e.to_string())
}

/// Check `name` against the XML 1.0 `Name` production.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}
