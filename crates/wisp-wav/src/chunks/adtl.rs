//! The associated-data list (`list`/`adtl`) chunk.
//!
//! Holds one `labl` sub-chunk per cue: cue point ID(4) followed by the label
//! as null-terminated text. The list's declared size is padded to an even
//! byte count; the `labl` sub-chunk sizes themselves are not.

use crate::cue::WavCue;
use crate::riff::{
    read_chunk_id, read_null_terminated_ascii, read_u32_le, RiffBuilder, CHUNK_HEADER_SIZE,
};

const ADTL_TAG_SIZE: usize = 4;
const LABL_ID_SIZE: usize = 4;

/// Encodes a complete label-list chunk. Returns an empty vector when there
/// are no cues, so the chunk is omitted entirely.
pub fn encode_adtl_chunk(cues: &[WavCue]) -> Vec<u8> {
    if cues.is_empty() {
        return Vec::new();
    }
    let labels_size: usize = cues.iter().map(|cue| cue.label.len() + 1).sum();
    let mut data_size = ADTL_TAG_SIZE + (CHUNK_HEADER_SIZE + LABL_ID_SIZE) * cues.len() + labels_size;
    data_size += data_size % 2;

    let mut chunk = RiffBuilder::with_capacity(CHUNK_HEADER_SIZE + data_size);
    chunk.tag(b"list").u32_le(data_size as u32).tag(b"adtl");
    for (i, cue) in cues.iter().enumerate() {
        chunk
            .tag(b"labl")
            .u32_le((LABL_ID_SIZE + cue.label.len() + 1) as u32)
            .u32_le(i as u32 + 1) // cue point ID
            .ascii_z(&cue.label);
    }
    chunk.pad_to_even();
    chunk.into_bytes()
}

/// Parses label strings from a label-list chunk's data, in sub-chunk order.
///
/// Sub-chunks that are not `labl` are skipped.
pub fn parse_adtl_labels(data: &[u8]) -> Vec<String> {
    let mut labels = Vec::new();
    let mut offset = ADTL_TAG_SIZE; // skip over the "adtl" tag
    while offset < data.len() {
        let Some(sub_chunk_id) = read_chunk_id(data, offset) else {
            break;
        };
        let Some(sub_chunk_size) = read_u32_le(data, offset + 4) else {
            break;
        };
        if &sub_chunk_id == b"labl" {
            let max_label_length = (sub_chunk_size as usize).saturating_sub(LABL_ID_SIZE);
            let label_offset = offset + CHUNK_HEADER_SIZE + LABL_ID_SIZE;
            labels.push(read_null_terminated_ascii(data, label_offset, max_label_length));
        }
        offset += CHUNK_HEADER_SIZE + sub_chunk_size as usize;
    }
    labels
}
