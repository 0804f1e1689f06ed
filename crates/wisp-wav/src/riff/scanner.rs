//! Chunk scanner for RIFF containers.

use super::bytes::{read_chunk_id, read_u32_le};
use super::{CHUNK_HEADER_SIZE, RIFF_HEADER_SIZE};

/// Finds the first chunk tagged `chunk_id` and returns its data slice.
///
/// Scanning starts immediately after the 12-byte container header and walks
/// `<tag> <size> <data>` entries in order. Returns `None` when the tag is
/// absent, or when the matching chunk's declared size runs past the end of
/// the buffer.
pub fn find_chunk<'a>(bytes: &'a [u8], chunk_id: &[u8; 4]) -> Option<&'a [u8]> {
    let mut offset = RIFF_HEADER_SIZE;
    while offset < bytes.len() {
        let tag = read_chunk_id(bytes, offset)?;
        let data_size = read_u32_le(bytes, offset + 4)? as usize;
        let data_start = offset + CHUNK_HEADER_SIZE;
        if &tag == chunk_id {
            return bytes.get(data_start..data_start.checked_add(data_size)?);
        }
        offset = data_start.checked_add(data_size)?;
    }
    None
}
