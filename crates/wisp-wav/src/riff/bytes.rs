//! Little-endian and ASCII byte readers.
//!
//! All readers are bounds-checked: reads past the end of the buffer yield
//! `None` (or a shortened string) instead of panicking, so malformed chunk
//! size fields can never crash the scanner.

/// Reads a little-endian unsigned 16-bit integer at `offset`.
pub fn read_u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    let field = bytes.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([field[0], field[1]]))
}

/// Reads a little-endian unsigned 32-bit integer at `offset`.
///
/// The result is unsigned even when the high bit is set.
pub fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let field = bytes.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([field[0], field[1], field[2], field[3]]))
}

/// Reads the 4 raw tag bytes at `offset`, ignoring anything that follows.
pub fn read_chunk_id(bytes: &[u8], offset: usize) -> Option<[u8; 4]> {
    let field = bytes.get(offset..offset + 4)?;
    Some([field[0], field[1], field[2], field[3]])
}

/// Reads up to `max_length` bytes starting at `offset`, stopping at the first
/// zero byte (exclusive) or at `max_length` when no zero byte is found.
///
/// Reads are clipped to the buffer; a zero-length range yields an empty
/// string. Bytes are interpreted as ASCII/Latin-1.
pub fn read_null_terminated_ascii(bytes: &[u8], offset: usize, max_length: usize) -> String {
    let mut text = String::new();
    for i in 0..max_length {
        match bytes.get(offset + i) {
            Some(0) | None => break,
            Some(&byte) => text.push(byte as char),
        }
    }
    text
}

/// Encodes text as ASCII/UTF-8 bytes followed by exactly one zero byte.
///
/// Empty text yields a single zero byte.
pub fn text_to_null_terminated_ascii(text: &str) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(text.len() + 1);
    encoded.extend_from_slice(text.as_bytes());
    encoded.push(0);
    encoded
}
