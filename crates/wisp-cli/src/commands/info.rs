//! Info command implementation.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use wisp_wav::pcm::compute_pcm_hash;

/// Machine-readable output of `wisp info`.
#[derive(Serialize)]
struct InfoOutput {
    path: String,
    sample_rate: u32,
    sample_count: usize,
    duration_seconds: f64,
    cue_count: usize,
    pcm_hash: Option<String>,
}

/// Run the info command.
pub fn run(path: &str, json_output: bool) -> Result<ExitCode> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))?;
    let decoded =
        wisp_wav::decode(&bytes).with_context(|| format!("Failed to decode WAV file: {}", path))?;
    let pcm_hash = compute_pcm_hash(&bytes);

    if json_output {
        let output = InfoOutput {
            path: path.to_string(),
            sample_rate: decoded.sample_rate,
            sample_count: decoded.samples.len(),
            duration_seconds: decoded.duration_seconds(),
            cue_count: decoded.cues.len(),
            pcm_hash,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "File:".dimmed(), path);
    println!("{} {} Hz", "Sample rate:".dimmed(), decoded.sample_rate);
    println!("{} {}", "Samples:".dimmed(), decoded.samples.len());
    println!(
        "{} {:.3} s",
        "Duration:".dimmed(),
        decoded.duration_seconds()
    );
    println!("{} {}", "Cues:".dimmed(), decoded.cues.len());
    if let Some(hash) = pcm_hash {
        println!("{} {}", "PCM hash:".dimmed(), &hash[..16]);
    }
    Ok(ExitCode::SUCCESS)
}
