//! The `LIST`/`INFO` chunk, used for the `ISFT` software tag.
//!
//! WISP stamps files with [`crate::WISP_ISFT_TAG`] so a decoder can tell
//! whether cue metadata was written by this profile. Foreign editors write
//! their own software tags here.

use crate::riff::{
    find_chunk, read_chunk_id, read_null_terminated_ascii, read_u32_le, RiffBuilder,
    CHUNK_HEADER_SIZE,
};

const INFO_TAG_SIZE: usize = 4;

/// Encodes a complete `LIST`/`INFO` chunk holding an `ISFT` software tag.
pub fn encode_info_chunk(software: &str) -> Vec<u8> {
    let mut data_size = INFO_TAG_SIZE + CHUNK_HEADER_SIZE + software.len() + 1;
    data_size += data_size % 2;
    let mut chunk = RiffBuilder::with_capacity(CHUNK_HEADER_SIZE + data_size);
    chunk
        .tag(b"LIST")
        .u32_le(data_size as u32)
        .tag(b"INFO")
        .tag(b"ISFT")
        .u32_le(software.len() as u32 + 1)
        .ascii_z(software)
        .pad_to_even();
    chunk.into_bytes()
}

/// Returns the `ISFT` software tag of a WAV container, if one is present.
pub fn parse_isft_tag(wav_bytes: &[u8]) -> Option<String> {
    let data = find_chunk(wav_bytes, b"LIST")?;
    if data.get(..INFO_TAG_SIZE)? != b"INFO" {
        return None;
    }
    let mut offset = INFO_TAG_SIZE;
    while offset < data.len() {
        let sub_chunk_id = read_chunk_id(data, offset)?;
        let sub_chunk_size = read_u32_le(data, offset + 4)? as usize;
        if &sub_chunk_id == b"ISFT" {
            return Some(read_null_terminated_ascii(
                data,
                offset + CHUNK_HEADER_SIZE,
                sub_chunk_size,
            ));
        }
        offset += CHUNK_HEADER_SIZE + sub_chunk_size;
    }
    None
}
