//! Cues command implementation.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use super::read_wav;

/// One cue row in the machine-readable output of `wisp cues`.
#[derive(Serialize)]
struct CueOutput {
    position_seconds: f64,
    label: String,
}

/// Run the cues command.
pub fn run(path: &str, json_output: bool) -> Result<ExitCode> {
    let decoded = read_wav(path)?;

    if json_output {
        let cues: Vec<CueOutput> = decoded
            .cues
            .iter()
            .map(|cue| CueOutput {
                position_seconds: cue.position,
                label: cue.label.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&cues)?);
        return Ok(ExitCode::SUCCESS);
    }

    if decoded.cues.is_empty() {
        println!("{}", "No cues.".dimmed());
        return Ok(ExitCode::SUCCESS);
    }
    for (i, cue) in decoded.cues.iter().enumerate() {
        println!(
            "{:>4}  {:>10.4}s  {}",
            (i + 1).to_string().dimmed(),
            cue.position,
            cue.label
        );
    }
    Ok(ExitCode::SUCCESS)
}
