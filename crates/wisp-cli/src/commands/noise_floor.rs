//! Noise-floor command implementation.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use wisp_dsp::{find_noise_floor, NoiseFloorOptions};

use super::read_wav;

/// Run the noise-floor command.
pub fn run(path: &str, chunk_duration: f64, segments: usize, json_output: bool) -> Result<ExitCode> {
    let decoded = read_wav(path)?;
    let options = NoiseFloorOptions {
        chunk_duration,
        rms_segment_count: segments,
    };
    let report = find_noise_floor(&decoded.samples, decoded.sample_rate, &options)
        .context("Noise-floor estimation failed")?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "File:".dimmed(), path);
    println!("{} {}", "RMS chunks:".dimmed(), report.chunks.len());
    println!("{} {:.6}", "Max RMS:".dimmed(), report.max_rms);
    println!(
        "{} {} of {}",
        "Selected segment:".dimmed(),
        report.most_frequent_segment,
        report.rms_segments.len()
    );
    println!(
        "{} {}",
        "Noise floor:".dimmed(),
        format!("{:.6}", report.noise_floor_rms).green().bold()
    );
    Ok(ExitCode::SUCCESS)
}
