//! Convert command implementation.
//!
//! Re-encodes any readable WAV file to the WISP profile. Cues from the input
//! are preserved unless replaced with `--cue SECONDS:LABEL` arguments.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use wisp_wav::WavCue;

use super::read_wav;

/// Parses a `SECONDS:LABEL` argument into a cue. The label may be empty and
/// may itself contain colons.
fn parse_cue_arg(arg: &str) -> Result<WavCue> {
    let Some((position, label)) = arg.split_once(':') else {
        bail!("expected SECONDS:LABEL, got '{}'", arg);
    };
    let position: f64 = position
        .parse()
        .with_context(|| format!("invalid cue position '{}'", position))?;
    if position < 0.0 {
        bail!("cue position must be non-negative, got {}", position);
    }
    Ok(WavCue::new(position, label))
}

/// Run the convert command.
pub fn run(input: &str, output: &str, cue_args: &[String]) -> Result<ExitCode> {
    let decoded = read_wav(input)?;

    let cues: Vec<WavCue> = if cue_args.is_empty() {
        decoded.cues
    } else {
        cue_args
            .iter()
            .map(|arg| parse_cue_arg(arg))
            .collect::<Result<_>>()?
    };

    let wav_bytes = wisp_wav::encode(&decoded.samples, decoded.sample_rate, &cues)
        .context("Failed to encode WISP WAV")?;
    std::fs::write(output, &wav_bytes)
        .with_context(|| format!("Failed to write file: {}", output))?;

    println!(
        "{} {} ({} bytes, {} cues)",
        "Wrote".green().bold(),
        output,
        wav_bytes.len(),
        cues.len()
    );
    Ok(ExitCode::SUCCESS)
}
