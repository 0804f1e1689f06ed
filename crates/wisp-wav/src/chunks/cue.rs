//! The `cue ` chunk.
//!
//! Layout per cue point: ID(4), playlist position(4, unused), data-chunk
//! tag(4), chunk start(4, unused), block start(4, unused), sample offset(4).
//! IDs are written sequentially starting at 1, matching the `labl`
//! sub-chunks of the label list.

use wisp_dsp::sample::{sample_count_to_time, time_to_sample_count};

use crate::cue::WavCue;
use crate::format::WavProfile;
use crate::riff::{read_u32_le, RiffBuilder, CHUNK_HEADER_SIZE};

const CUE_POINT_SIZE: usize = 24;
const CUE_COUNT_SIZE: usize = 4;
const SAMPLE_OFFSET_FIELD: usize = 20;

/// Encodes a complete cue chunk. Returns an empty vector when there are no
/// cues, so the chunk is omitted entirely.
pub fn encode_cue_chunk(cues: &[WavCue], profile: &WavProfile) -> Vec<u8> {
    if cues.is_empty() {
        return Vec::new();
    }
    let data_size = CUE_COUNT_SIZE + CUE_POINT_SIZE * cues.len();
    let mut chunk = RiffBuilder::with_capacity(CHUNK_HEADER_SIZE + data_size);
    chunk
        .tag(b"cue ")
        .u32_le(data_size as u32)
        .u32_le(cues.len() as u32);
    for (i, cue) in cues.iter().enumerate() {
        let sample_offset = time_to_sample_count(cue.position, profile.sample_rate);
        chunk
            .u32_le(i as u32 + 1) // cue point ID
            .u32_le(0) // position, unused without a playlist
            .tag(b"data")
            .u32_le(0) // chunk start, single data chunk
            .u32_le(0) // block start, uncompressed data
            .u32_le(sample_offset as u32);
    }
    chunk.into_bytes()
}

/// Parses cue positions from a cue chunk's data; labels start out empty.
///
/// Entries whose declared count runs past the data are dropped.
pub fn parse_cue_chunk(data: &[u8], sample_rate: u32) -> Vec<WavCue> {
    let Some(cue_count) = read_u32_le(data, 0) else {
        return Vec::new();
    };
    let mut cues = Vec::new();
    for cue_i in 0..cue_count as usize {
        let offset_field = CUE_COUNT_SIZE + cue_i * CUE_POINT_SIZE + SAMPLE_OFFSET_FIELD;
        let Some(sample_offset) = read_u32_le(data, offset_field) else {
            break;
        };
        cues.push(WavCue {
            position: sample_count_to_time(sample_offset as usize, sample_rate),
            label: String::new(),
        });
    }
    cues
}
