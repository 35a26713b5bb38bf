//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Two data rows under a two-field header
pub const SAMPLE: &str = "name\tage\nAlice\t30\nBob\t25\n";

pub const SAMPLE_CSV: &str = "name,age\r\nAlice,30\r\nBob,25\r\n";

pub const SAMPLE_XML: &str = "<root><item><name>Alice</name><age>30</age></item><item><name>Bob</name><age>25</age></item></root>";

/// Write `contents` to `name` inside `temp_dir` and return its path
pub fn write_input(temp_dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// A header plus `rows` data rows with `cols` fields each
pub fn generate_table(rows: usize, cols: usize) -> String {
    let header: Vec<String> = (0..cols).map(|c| format!("col_{}", c)).collect();
    let mut text = header.join("\t");
    text.push('\n');
    for r in 0..rows {
        let row: Vec<String> = (0..cols).map(|c| format!("r{}c{}", r, c)).collect();
        text.push_str(&row.join("\t"));
        text.push('\n');
    }
    text
}

/// Every byte value 0x00-0xFF in the data row, tabs and newlines excluded
pub fn all_bytes_input() -> Vec<u8> {
    let mut bytes = b"value\n".to_vec();
    bytes.extend((0..=255u8).filter(|b| !matches!(b, b'\t' | b'\n' | b'\r')));
    bytes.push(b'\n');
    bytes
}

/// Names of the output files present in `dir`
pub fn output_files(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("output."))
        .collect();
    names.sort();
    names
}
