//! Whole-container tests for the WISP codec.

use pretty_assertions::assert_eq;

use crate::chunks::adtl::encode_adtl_chunk;
use crate::chunks::cue::encode_cue_chunk;
use crate::chunks::data::encode_data_chunk;
use crate::chunks::fmt::encode_fmt_chunk;
use crate::chunks::info::encode_info_chunk;
use crate::cue::WavCue;
use crate::decode::decode;
use crate::encode::{encode, encode_channels, encode_samples_only};
use crate::error::WavError;
use crate::format::{WavProfile, WISP_ISFT_TAG};
use crate::riff::find_chunk;

const SAMPLE_TOLERANCE: f64 = 1.0 / 32767.0;
const CUE_TIME_TOLERANCE: f64 = 1.0 / 44100.0;

fn test_samples() -> Vec<f64> {
    (0..200).map(|i| (i as f64 / 200.0) * 2.0 - 1.0).collect()
}

fn test_cues() -> Vec<WavCue> {
    vec![
        WavCue::new(0.0, "viseme-rest"),
        WavCue::new(0.001, "viseme-mbp"),
        WavCue::new(0.0025, ""),
    ]
}

fn container_from_chunks(chunks: &[&[u8]]) -> Vec<u8> {
    let combined: usize = chunks.iter().map(|chunk| chunk.len()).sum();
    let mut bytes = Vec::with_capacity(12 + combined);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(combined as u32 + 4).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    for chunk in chunks {
        bytes.extend_from_slice(chunk);
    }
    bytes
}

// =========================================================================
// Round-trip tests
// =========================================================================

#[test]
fn test_round_trip_samples_and_cues() {
    let samples = test_samples();
    let cues = test_cues();
    let wav_bytes = encode(&samples, 44100, &cues).unwrap();
    let decoded = decode(&wav_bytes).unwrap();

    assert_eq!(decoded.sample_rate, 44100);
    assert_eq!(decoded.samples.len(), samples.len());
    for (original, restored) in samples.iter().zip(&decoded.samples) {
        assert!((original - restored).abs() <= SAMPLE_TOLERANCE);
    }

    assert_eq!(decoded.cues.len(), cues.len());
    for (original, restored) in cues.iter().zip(&decoded.cues) {
        assert!((original.position - restored.position).abs() <= CUE_TIME_TOLERANCE);
        assert_eq!(original.label, restored.label);
    }
}

#[test]
fn test_round_trip_without_cues_writes_no_metadata_chunks() {
    let wav_bytes = encode_samples_only(&test_samples(), 44100).unwrap();
    assert!(find_chunk(&wav_bytes, b"fmt ").is_some());
    assert!(find_chunk(&wav_bytes, b"data").is_some());
    assert!(find_chunk(&wav_bytes, b"cue ").is_none());
    assert!(find_chunk(&wav_bytes, b"list").is_none());
    assert_eq!(decode(&wav_bytes).unwrap().cues, Vec::new());
}

#[test]
fn test_encode_is_idempotent_for_profile_rate_input() {
    let samples = test_samples();
    let cues = test_cues();
    let first = encode(&samples, 44100, &cues).unwrap();
    let second = encode(&samples, 44100, &cues).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_header_size_field_covers_following_bytes() {
    let wav_bytes = encode(&test_samples(), 44100, &test_cues()).unwrap();
    let declared = u32::from_le_bytes([wav_bytes[4], wav_bytes[5], wav_bytes[6], wav_bytes[7]]);
    assert_eq!(declared as usize, wav_bytes.len() - 8);
}

#[test]
fn test_encode_resamples_foreign_rate_to_profile_rate() {
    let samples = vec![0.0; 100];
    let wav_bytes = encode_samples_only(&samples, 22050).unwrap();
    let decoded = decode(&wav_bytes).unwrap();
    assert_eq!(decoded.sample_rate, 44100);
    assert_eq!(decoded.samples.len(), 200);
}

#[test]
fn test_encode_channels_mixes_down() {
    let channels = vec![vec![1.0, 0.0], vec![0.0, 0.0]];
    let wav_bytes = encode_channels(&channels, 44100, &[]).unwrap();
    let decoded = decode(&wav_bytes).unwrap();
    assert_eq!(decoded.samples.len(), 2);
    assert!((decoded.samples[0] - 0.5).abs() <= SAMPLE_TOLERANCE);
    assert!(decoded.samples[1].abs() <= SAMPLE_TOLERANCE);
}

#[test]
fn test_encode_rejects_zero_sample_rate() {
    let err = encode_samples_only(&[0.0], 0).unwrap_err();
    assert_eq!(err, WavError::InvalidSampleRate { rate: 0 });
}

// =========================================================================
// Chunk-ordering and degradation tests
// =========================================================================

#[test]
fn test_wisp_chunk_order_places_data_after_fmt() {
    let wav_bytes = encode(&[0.25; 4], 44100, &test_cues()).unwrap();
    assert_eq!(&wav_bytes[12..16], b"fmt ");
    assert_eq!(&wav_bytes[36..40], b"data");
}

#[test]
fn test_decode_tolerates_generic_riff_chunk_order() {
    // Generic RIFF/WAVE places cue and associated-data chunks before data.
    let profile = WavProfile::WISP;
    let samples = [0.5, -0.5, 0.25];
    let cues = test_cues();
    let reordered = container_from_chunks(&[
        &encode_fmt_chunk(&profile),
        &encode_cue_chunk(&cues, &profile),
        &encode_adtl_chunk(&cues),
        &encode_data_chunk(&samples),
    ]);

    let decoded = decode(&reordered).unwrap();
    assert_eq!(decoded.samples.len(), samples.len());
    assert_eq!(decoded.cues.len(), cues.len());
    assert_eq!(decoded.cues[0].label, "viseme-rest");
}

#[test]
fn test_decode_without_adtl_yields_unlabeled_cues() {
    let profile = WavProfile::WISP;
    let cues = test_cues();
    let wav_bytes = container_from_chunks(&[
        &encode_fmt_chunk(&profile),
        &encode_data_chunk(&[0.0; 8]),
        &encode_cue_chunk(&cues, &profile),
    ]);

    let decoded = decode(&wav_bytes).unwrap();
    assert_eq!(decoded.cues.len(), cues.len());
    assert!(decoded.cues.iter().all(|cue| cue.label.is_empty()));
}

#[test]
fn test_decode_zips_labels_up_to_shorter_list() {
    let profile = WavProfile::WISP;
    let cues = test_cues();
    let fewer_labels = vec![WavCue::new(0.0, "only")];
    let wav_bytes = container_from_chunks(&[
        &encode_fmt_chunk(&profile),
        &encode_data_chunk(&[0.0; 8]),
        &encode_cue_chunk(&cues, &profile),
        &encode_adtl_chunk(&fewer_labels),
    ]);

    let decoded = decode(&wav_bytes).unwrap();
    assert_eq!(decoded.cues.len(), 3);
    assert_eq!(decoded.cues[0].label, "only");
    assert_eq!(decoded.cues[1].label, "");
    assert_eq!(decoded.cues[2].label, "");
}

// =========================================================================
// ISFT format-tag gating
// =========================================================================

#[test]
fn test_decode_keeps_cues_for_wisp_stamped_file() {
    let profile = WavProfile::WISP;
    let cues = test_cues();
    let wav_bytes = container_from_chunks(&[
        &encode_fmt_chunk(&profile),
        &encode_data_chunk(&[0.0; 8]),
        &encode_cue_chunk(&cues, &profile),
        &encode_adtl_chunk(&cues),
        &encode_info_chunk(WISP_ISFT_TAG),
    ]);
    assert_eq!(decode(&wav_bytes).unwrap().cues.len(), 3);
}

#[test]
fn test_decode_discards_cues_for_foreign_stamped_file() {
    let profile = WavProfile::WISP;
    let cues = test_cues();
    let wav_bytes = container_from_chunks(&[
        &encode_fmt_chunk(&profile),
        &encode_data_chunk(&[0.0; 8]),
        &encode_cue_chunk(&cues, &profile),
        &encode_adtl_chunk(&cues),
        &encode_info_chunk("Audacity 3.4"),
    ]);

    let decoded = decode(&wav_bytes).unwrap();
    assert_eq!(decoded.cues, Vec::new());
    assert_eq!(decoded.samples.len(), 8);
}

// =========================================================================
// Error cases
// =========================================================================

#[test]
fn test_decode_rejects_non_riff_bytes() {
    assert_eq!(decode(b"OggS").unwrap_err(), WavError::MissingRiffHeader);
    assert_eq!(decode(&[]).unwrap_err(), WavError::MissingRiffHeader);
    let mut not_wave = encode_samples_only(&[0.0], 44100).unwrap();
    not_wave[8..12].copy_from_slice(b"AVI ");
    assert_eq!(decode(&not_wave).unwrap_err(), WavError::MissingRiffHeader);
}

#[test]
fn test_decode_requires_fmt_and_data_chunks() {
    let no_fmt = container_from_chunks(&[&encode_data_chunk(&[0.0; 4])]);
    assert_eq!(decode(&no_fmt).unwrap_err(), WavError::MissingChunk { id: "fmt " });

    let no_data = container_from_chunks(&[&encode_fmt_chunk(&WavProfile::WISP)]);
    assert_eq!(decode(&no_data).unwrap_err(), WavError::MissingChunk { id: "data" });
}

#[test]
fn test_decode_rejects_unsupported_formats() {
    let mut fmt = encode_fmt_chunk(&WavProfile::WISP);
    fmt[8..10].copy_from_slice(&3u16.to_le_bytes()); // IEEE float
    let float_wav = container_from_chunks(&[&fmt, &encode_data_chunk(&[0.0; 4])]);
    assert_eq!(
        decode(&float_wav).unwrap_err(),
        WavError::UnsupportedFormatCode { code: 3 }
    );

    let mut fmt = encode_fmt_chunk(&WavProfile::WISP);
    fmt[10..12].copy_from_slice(&2u16.to_le_bytes()); // stereo
    let stereo_wav = container_from_chunks(&[&fmt, &encode_data_chunk(&[0.0; 4])]);
    assert_eq!(
        decode(&stereo_wav).unwrap_err(),
        WavError::UnsupportedChannelCount { channels: 2 }
    );

    let mut fmt = encode_fmt_chunk(&WavProfile::WISP);
    fmt[22..24].copy_from_slice(&8u16.to_le_bytes()); // 8-bit
    let eight_bit_wav = container_from_chunks(&[&fmt, &encode_data_chunk(&[0.0; 4])]);
    assert_eq!(
        decode(&eight_bit_wav).unwrap_err(),
        WavError::UnsupportedBitDepth { bits: 8 }
    );
}

#[test]
fn test_decode_survives_malformed_chunk_size() {
    let mut wav_bytes = encode_samples_only(&[0.0; 4], 44100).unwrap();
    // Blow up the data chunk's declared size beyond the buffer.
    let size_offset = 12 + 24 + 4;
    wav_bytes[size_offset..size_offset + 4].copy_from_slice(&u32::MAX.to_le_bytes());
    assert_eq!(
        decode(&wav_bytes).unwrap_err(),
        WavError::MissingChunk { id: "data" }
    );
}

// =========================================================================
// Cross-validation against an independent reader
// =========================================================================

#[test]
fn test_hound_reads_encoder_output() {
    let samples = test_samples();
    let wav_bytes = encode(&samples, 44100, &test_cues()).unwrap();

    let reader = hound::WavReader::new(std::io::Cursor::new(wav_bytes)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let read: Vec<i16> = reader.into_samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(read.len(), samples.len());
    for (original, pcm_value) in samples.iter().zip(&read) {
        assert_eq!((original * 32767.0).round() as i16, *pcm_value);
    }
}
