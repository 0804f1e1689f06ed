//! WAV container decoding.

use crate::chunks::adtl::parse_adtl_labels;
use crate::chunks::cue::parse_cue_chunk;
use crate::chunks::data::parse_data_chunk;
use crate::chunks::fmt::parse_fmt_chunk;
use crate::chunks::info::parse_isft_tag;
use crate::cue::WavCue;
use crate::error::{WavError, WavResult};
use crate::format::{WAVE_FORMAT_PCM, WISP_ISFT_TAG};
use crate::riff::{find_chunk, RIFF_HEADER_SIZE};

/// Audio and metadata decoded from a WAV container.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWav {
    /// Mono samples in `[-1.0, 1.0]`.
    pub samples: Vec<f64>,
    /// Sample rate declared by the file, not assumed from the profile.
    pub sample_rate: u32,
    /// Cues in file order; empty when the file carries none.
    pub cues: Vec<WavCue>,
}

impl DecodedWav {
    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

fn parse_cues(wav_bytes: &[u8], sample_rate: u32) -> Vec<WavCue> {
    let Some(cue_chunk_data) = find_chunk(wav_bytes, b"cue ") else {
        return Vec::new();
    };
    let mut cues = parse_cue_chunk(cue_chunk_data, sample_rate);
    if let Some(adtl_chunk_data) = find_chunk(wav_bytes, b"list") {
        // Labels attach to cues positionally; the encoder's sequential IDs
        // keep list order and ID order identical.
        let labels = parse_adtl_labels(adtl_chunk_data);
        for (cue, label) in cues.iter_mut().zip(labels) {
            cue.label = label;
        }
    }
    cues
}

/// Decodes a 16-bit mono PCM WAV file into samples, sample rate, and cues.
///
/// Any valid mono/PCM WAVE is accepted, in either standard or WISP chunk
/// order. Absent cue or label chunks degrade silently to fewer cue fields.
/// When the file carries an `ISFT` software tag that is not WISP's, the cues
/// are discarded (the file's metadata layout is untrusted) while the samples
/// are still returned.
///
/// # Errors
/// Fails when the RIFF/WAVE magic or a required `fmt `/`data` chunk is
/// missing, or when the format is not 16-bit mono PCM. Callers with other
/// formats can fall back to a platform decoder.
pub fn decode(wav_bytes: &[u8]) -> WavResult<DecodedWav> {
    if wav_bytes.len() < RIFF_HEADER_SIZE
        || &wav_bytes[0..4] != b"RIFF"
        || &wav_bytes[8..12] != b"WAVE"
    {
        return Err(WavError::MissingRiffHeader);
    }

    let fmt_data = find_chunk(wav_bytes, b"fmt ").ok_or(WavError::MissingChunk { id: "fmt " })?;
    let fmt = parse_fmt_chunk(fmt_data)?;
    if fmt.format_code != WAVE_FORMAT_PCM {
        return Err(WavError::UnsupportedFormatCode { code: fmt.format_code });
    }
    if fmt.channels != 1 {
        return Err(WavError::UnsupportedChannelCount { channels: fmt.channels });
    }
    if fmt.bits_per_sample != 16 {
        return Err(WavError::UnsupportedBitDepth { bits: fmt.bits_per_sample });
    }
    if fmt.sample_rate == 0 {
        return Err(WavError::InvalidSampleRate { rate: 0 });
    }

    let data = find_chunk(wav_bytes, b"data").ok_or(WavError::MissingChunk { id: "data" })?;
    let samples = parse_data_chunk(data);

    let mut cues = parse_cues(wav_bytes, fmt.sample_rate);
    if let Some(isft_tag) = parse_isft_tag(wav_bytes) {
        // Avoid using cues from non-WISP WAV files.
        if isft_tag != WISP_ISFT_TAG {
            cues.clear();
        }
    }

    Ok(DecodedWav {
        samples,
        sample_rate: fmt.sample_rate,
        cues,
    })
}
