//! Silence generation.

use crate::sample::msecs_to_sample_count;

/// Creates a buffer of silent samples covering `silence_msecs` milliseconds.
pub fn silence_samples(sample_rate: u32, silence_msecs: u64) -> Vec<f64> {
    vec![0.0; msecs_to_sample_count(silence_msecs, sample_rate)]
}

/// Returns a copy of `samples` with `silence_msecs` milliseconds of silence
/// appended.
pub fn append_silence(samples: &[f64], sample_rate: u32, silence_msecs: u64) -> Vec<f64> {
    let total = samples.len() + msecs_to_sample_count(silence_msecs, sample_rate);
    let mut appended = Vec::with_capacity(total);
    appended.extend_from_slice(samples);
    appended.resize(total, 0.0);
    appended
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_samples_length() {
        assert_eq!(silence_samples(44100, 1000).len(), 44100);
        assert_eq!(silence_samples(44100, 0).len(), 0);
    }

    #[test]
    fn test_append_silence() {
        let appended = append_silence(&[0.5, -0.5], 1000, 3);
        assert_eq!(appended, vec![0.5, -0.5, 0.0, 0.0, 0.0]);
    }
}
