//! tabconv: Tab-delimited Conversion Library
//!
//! Reads a tab-delimited file whose first line is a header and re-serializes
//! it as CSV, JSON, or XML.

pub mod cli;
pub mod export;
pub mod pipeline;
pub mod utils;
