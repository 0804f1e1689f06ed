//! The `fmt ` chunk.

use crate::error::{WavError, WavResult};
use crate::format::{WavProfile, WAVE_FORMAT_PCM};
use crate::riff::{read_u16_le, read_u32_le, RiffBuilder, CHUNK_HEADER_SIZE};

/// Size of the fmt chunk's data for plain PCM.
pub const FMT_CHUNK_DATA_SIZE: usize = 16;

/// Parsed contents of a fmt chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtChunk {
    /// Compression format code (1 = PCM).
    pub format_code: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

/// Encodes a complete fmt chunk for the given profile.
pub fn encode_fmt_chunk(profile: &WavProfile) -> Vec<u8> {
    let mut chunk = RiffBuilder::with_capacity(CHUNK_HEADER_SIZE + FMT_CHUNK_DATA_SIZE);
    chunk
        .tag(b"fmt ")
        .u32_le(FMT_CHUNK_DATA_SIZE as u32)
        .u16_le(WAVE_FORMAT_PCM)
        .u16_le(profile.channels)
        .u32_le(profile.sample_rate)
        .u32_le(profile.byte_rate())
        .u16_le(profile.block_align())
        .u16_le(profile.bits_per_sample);
    chunk.into_bytes()
}

/// Parses a fmt chunk's data.
pub fn parse_fmt_chunk(data: &[u8]) -> WavResult<FmtChunk> {
    if data.len() < FMT_CHUNK_DATA_SIZE {
        return Err(WavError::TruncatedChunk {
            id: "fmt ",
            needed: FMT_CHUNK_DATA_SIZE,
            available: data.len(),
        });
    }
    // Length was checked above, so none of these reads can come up short.
    Ok(FmtChunk {
        format_code: read_u16_le(data, 0).unwrap_or_default(),
        channels: read_u16_le(data, 2).unwrap_or_default(),
        sample_rate: read_u32_le(data, 4).unwrap_or_default(),
        byte_rate: read_u32_le(data, 8).unwrap_or_default(),
        block_align: read_u16_le(data, 12).unwrap_or_default(),
        bits_per_sample: read_u16_le(data, 14).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_encode_wisp_fmt_chunk() {
        let expected = vec![
            102, 109, 116, 32, // "fmt "
            16, 0, 0, 0, // chunk data size
            1, 0, // PCM format code
            1, 0, // mono
            68, 172, 0, 0, // 44100 Hz
            136, 88, 1, 0, // byte rate 88200
            2, 0, // block align
            16, 0, // bits per sample
        ];
        assert_eq!(encode_fmt_chunk(&WavProfile::WISP), expected);
    }

    #[test]
    fn test_parse_round_trips_encode() {
        let chunk = encode_fmt_chunk(&WavProfile::WISP);
        let parsed = parse_fmt_chunk(&chunk[CHUNK_HEADER_SIZE..]).unwrap();
        assert_eq!(
            parsed,
            FmtChunk {
                format_code: 1,
                channels: 1,
                sample_rate: 44100,
                byte_rate: 88200,
                block_align: 2,
                bits_per_sample: 16,
            }
        );
    }

    #[test]
    fn test_parse_rejects_truncated_data() {
        let err = parse_fmt_chunk(&[0; 10]).unwrap_err();
        assert_eq!(
            err,
            WavError::TruncatedChunk {
                id: "fmt ",
                needed: 16,
                available: 10,
            }
        );
    }
}
