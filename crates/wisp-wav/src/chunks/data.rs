//! The `data` chunk.

use wisp_dsp::{pcm16_to_samples, samples_to_pcm16};

use crate::riff::{RiffBuilder, CHUNK_HEADER_SIZE};

/// Encodes a complete data chunk by quantizing samples to 16-bit PCM.
pub fn encode_data_chunk(samples: &[f64]) -> Vec<u8> {
    let pcm = samples_to_pcm16(samples);
    let mut chunk = RiffBuilder::with_capacity(CHUNK_HEADER_SIZE + pcm.len());
    chunk.tag(b"data").u32_le(pcm.len() as u32).raw(&pcm);
    chunk.into_bytes()
}

/// Dequantizes a data chunk's 16-bit PCM payload to float samples.
pub fn parse_data_chunk(data: &[u8]) -> Vec<f64> {
    pcm16_to_samples(data)
}
