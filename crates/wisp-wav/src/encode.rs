//! WISP container encoding.

use wisp_dsp::{combine_channels, resample};

use crate::chunks::adtl::encode_adtl_chunk;
use crate::chunks::cue::encode_cue_chunk;
use crate::chunks::data::encode_data_chunk;
use crate::chunks::fmt::encode_fmt_chunk;
use crate::cue::WavCue;
use crate::error::{WavError, WavResult};
use crate::format::WavProfile;
use crate::riff::{RiffBuilder, RIFF_HEADER_SIZE};

/// Encodes the 12-byte `"RIFF" <size> "WAVE"` container header.
///
/// `chunks_data_size` is the byte length of every chunk following the header;
/// the declared size additionally counts the 4-byte `"WAVE"` tag.
fn encode_riff_wave_header(chunks_data_size: usize) -> Vec<u8> {
    let mut header = RiffBuilder::with_capacity(RIFF_HEADER_SIZE);
    header
        .tag(b"RIFF")
        .u32_le(chunks_data_size as u32 + 4)
        .tag(b"WAVE");
    header.into_bytes()
}

fn normalized_samples_and_cues_to_wav_bytes(samples: &[f64], cues: &[WavCue]) -> Vec<u8> {
    let profile = WavProfile::WISP;
    let fmt_chunk = encode_fmt_chunk(&profile);
    let data_chunk = encode_data_chunk(samples);
    let cue_chunk = encode_cue_chunk(cues, &profile);
    let adtl_chunk = encode_adtl_chunk(cues);
    let combined_chunk_size =
        fmt_chunk.len() + data_chunk.len() + cue_chunk.len() + adtl_chunk.len();

    let mut wav = RiffBuilder::with_capacity(RIFF_HEADER_SIZE + combined_chunk_size);
    wav.raw(&encode_riff_wave_header(combined_chunk_size))
        .raw(&fmt_chunk)
        .raw(&data_chunk)
        .raw(&cue_chunk)
        .raw(&adtl_chunk);
    wav.into_bytes()
}

/// Encodes mono samples and cues as a WISP WAV file.
///
/// Input at a rate other than the profile's 44.1 kHz is resampled first. Cue
/// positions are interpreted in seconds against the profile rate.
///
/// # Errors
/// Fails for a zero sample rate.
pub fn encode(samples: &[f64], sample_rate: u32, cues: &[WavCue]) -> WavResult<Vec<u8>> {
    if sample_rate == 0 {
        return Err(WavError::InvalidSampleRate { rate: sample_rate });
    }
    let profile_rate = WavProfile::WISP.sample_rate;
    if sample_rate == profile_rate {
        Ok(normalized_samples_and_cues_to_wav_bytes(samples, cues))
    } else {
        let normalized = resample(samples, sample_rate, profile_rate);
        Ok(normalized_samples_and_cues_to_wav_bytes(&normalized, cues))
    }
}

/// Encodes mono samples without any cue metadata.
pub fn encode_samples_only(samples: &[f64], sample_rate: u32) -> WavResult<Vec<u8>> {
    encode(samples, sample_rate, &[])
}

/// Encodes multichannel samples, mixing them down to the profile's mono
/// layout first.
pub fn encode_channels(
    channels: &[Vec<f64>],
    sample_rate: u32,
    cues: &[WavCue],
) -> WavResult<Vec<u8>> {
    encode(&combine_channels(channels), sample_rate, cues)
}
