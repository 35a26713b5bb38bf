//! Lossy single-byte decoding of raw input bytes

/// Character substituted for any byte the decode table leaves unmapped.
pub const PLACEHOLDER: char = char::REPLACEMENT_CHARACTER;

/// Latin-1 (ISO-8859-1) table: byte `b` maps to code point `U+00bb`.
static LATIN1: [Option<char>; 256] = latin1_table();

const fn latin1_table() -> [Option<char>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = Some(i as u8 as char);
        i += 1;
    }
    table
}

/// Decodes Latin-1 bytes to a String.
///
/// Never fails: every byte is looked up in the table, and any byte without an
/// entry becomes [`PLACEHOLDER`].
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| LATIN1[b as usize].unwrap_or(PLACEHOLDER))
        .collect()
}
