//! Byte builder for assembling RIFF chunks.

use super::bytes::text_to_null_terminated_ascii;

/// Appends length-prefixed RIFF segments to a growing byte buffer.
///
/// Chunk encoders use this instead of scattering offset arithmetic across
/// call sites; every write advances an implicit cursor at the buffer's end.
#[derive(Debug, Default)]
pub struct RiffBuilder {
    buf: Vec<u8>,
}

impl RiffBuilder {
    /// Creates a builder with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Appends a 4-byte tag in natural reading order.
    pub fn tag(&mut self, id: &[u8; 4]) -> &mut Self {
        self.buf.extend_from_slice(id);
        self
    }

    /// Appends a little-endian unsigned 32-bit integer.
    pub fn u32_le(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Appends a little-endian unsigned 16-bit integer.
    pub fn u16_le(&mut self, value: u16) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Appends raw bytes.
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Appends text as null-terminated ASCII.
    pub fn ascii_z(&mut self, text: &str) -> &mut Self {
        self.buf.extend_from_slice(&text_to_null_terminated_ascii(text));
        self
    }

    /// Appends zero bytes until the buffer length is even.
    pub fn pad_to_even(&mut self) -> &mut Self {
        if self.buf.len() % 2 != 0 {
            self.buf.push(0);
        }
        self
    }

    /// Current length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the builder, returning the assembled bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
