//! Header-keyed records used by the JSON and XML serializers

use indexmap::IndexMap;
use serde::Serialize;

/// One data row keyed by header field names, in header order.
///
/// Serializes as a JSON object. Built by zipping header and row up to the
/// shorter of the two, so a short row simply lacks its trailing keys and a
/// long row loses its extra fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Zip `header` with `row`.
    ///
    /// A repeated header name keeps the position of its first occurrence and
    /// the value of its last.
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        let mut fields = IndexMap::with_capacity(header.len().min(row.len()));
        for (key, value) in header.iter().zip(row) {
            fields.insert(key.clone(), value.clone());
        }
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
