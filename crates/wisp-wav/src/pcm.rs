//! PCM payload extraction and hashing.
//!
//! Encoding is deterministic, so the BLAKE3 hash of a file's PCM payload
//! identifies its audio content regardless of surrounding metadata chunks.

use crate::riff::{find_chunk, RIFF_HEADER_SIZE};

/// Extracts the raw PCM payload from a WAV file buffer.
///
/// Returns `None` when the buffer is not a RIFF/WAVE container or has no
/// intact data chunk.
pub fn extract_pcm_data(wav_bytes: &[u8]) -> Option<&[u8]> {
    if wav_bytes.len() < RIFF_HEADER_SIZE
        || &wav_bytes[0..4] != b"RIFF"
        || &wav_bytes[8..12] != b"WAVE"
    {
        return None;
    }
    find_chunk(wav_bytes, b"data")
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
pub fn compute_pcm_hash(wav_bytes: &[u8]) -> Option<String> {
    extract_pcm_data(wav_bytes).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
