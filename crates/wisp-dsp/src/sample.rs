//! Sample buffer transforms.
//!
//! Conversions between time and sample counts, linear resampling, multichannel
//! mixdown, and float/16-bit PCM quantization. Samples are `f64` nominally in
//! `[-1.0, 1.0]`; none of these functions clamp their input.

use serde::Serialize;

const PCM_BYTES_PER_SAMPLE: usize = 2;
const MAX_16BIT_PCM_VALUE: f64 = 32767.0;

/// Converts a sample count to a time offset in seconds.
pub fn sample_count_to_time(sample_count: usize, sample_rate: u32) -> f64 {
    sample_count as f64 / sample_rate as f64
}

/// Converts a time offset in seconds to the nearest sample count.
pub fn time_to_sample_count(time: f64, sample_rate: u32) -> u64 {
    (time * sample_rate as f64).round() as u64
}

/// Converts a sample count to whole milliseconds.
pub fn sample_count_to_msecs(sample_count: usize, sample_rate: u32) -> u64 {
    ((sample_count as f64 / sample_rate as f64) * 1000.0).round() as u64
}

/// Converts milliseconds to the nearest sample count.
pub fn msecs_to_sample_count(msecs: u64, sample_rate: u32) -> usize {
    ((msecs as f64 / 1000.0) * sample_rate as f64).round() as usize
}

/// Linearly resamples a buffer from one sample rate to another.
///
/// Equal rates return a copy of the input. Otherwise the output length is
/// `ceil(len * to_rate / from_rate)`, and each output sample blends the two
/// input samples straddling its fractional source position, with the ceiling
/// index clamped to the last valid sample.
pub fn resample(samples: &[f64], from_rate: u32, to_rate: u32) -> Vec<f64> {
    if from_rate == to_rate {
        return samples.to_vec();
    }
    let resample_ratio = to_rate as f64 / from_rate as f64;
    let from_ratio = from_rate as f64 / to_rate as f64;
    let out_len = (samples.len() as f64 * resample_ratio).ceil() as usize;
    let mut resampled = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let from_pos = i as f64 * from_ratio;
        let left_i = from_pos.floor() as usize;
        let right_i = (from_pos.ceil() as usize).min(samples.len() - 1);
        let left_weight = from_pos - from_pos.floor();
        let right_weight = 1.0 - left_weight;
        resampled.push(samples[left_i] * left_weight + samples[right_i] * right_weight);
    }
    resampled
}

/// Mixes multichannel sample buffers down to a single channel.
///
/// A single channel is returned unchanged. For more channels, output sample
/// `i` is the arithmetic mean of every channel's sample `i`. All channels are
/// expected to have the length of the first.
pub fn combine_channels(channels: &[Vec<f64>]) -> Vec<f64> {
    if channels.is_empty() {
        return Vec::new();
    }
    if channels.len() == 1 {
        return channels[0].clone();
    }
    let channel_count = channels.len();
    let sample_count = channels[0].len();
    let mut combined = Vec::with_capacity(sample_count);
    for sample_i in 0..sample_count {
        let sum: f64 = channels.iter().map(|channel| channel[sample_i]).sum();
        combined.push(sum / channel_count as f64);
    }
    combined
}

/// Quantizes float samples to little-endian signed 16-bit PCM bytes.
///
/// Each sample maps to `round(s * 32767)`. No clamping is applied: values
/// outside `[-1.0, 1.0]` wrap modulo 2^16, matching a raw 16-bit store.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * PCM_BYTES_PER_SAMPLE);
    for &sample in samples {
        let pcm_value = (sample * MAX_16BIT_PCM_VALUE).round() as i64 as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }
    pcm
}

/// Dequantizes little-endian signed 16-bit PCM bytes to float samples.
///
/// A trailing odd byte, if any, is ignored.
pub fn pcm16_to_samples(pcm: &[u8]) -> Vec<f64> {
    pcm.chunks_exact(PCM_BYTES_PER_SAMPLE)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f64 / MAX_16BIT_PCM_VALUE)
        .collect()
}

/// Summary statistics for a sample buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleStats {
    /// Smallest sample value.
    pub min_value: f64,
    /// Largest sample value.
    pub max_value: f64,
    /// Mean sample value.
    pub average_value: f64,
    /// Number of exactly-zero samples.
    pub zero_count: usize,
    /// Total number of samples.
    pub sample_count: usize,
}

/// Computes summary statistics over a sample buffer.
pub fn characterize_samples(samples: &[f64]) -> SampleStats {
    let sample_count = samples.len();
    let mut min_value = 1.0f64;
    let mut max_value = -1.0f64;
    let mut sum = 0.0;
    let mut zero_count = 0;
    for &sample in samples {
        if sample < min_value {
            min_value = sample;
        }
        if sample > max_value {
            max_value = sample;
        }
        sum += sample;
        if sample == 0.0 {
            zero_count += 1;
        }
    }
    let average_value = if sample_count == 0 {
        0.0
    } else {
        sum / sample_count as f64
    };
    SampleStats {
        min_value,
        max_value,
        average_value,
        zero_count,
        sample_count,
    }
}
