//! wisp - inspect, convert, and analyze WISP WAV files from the shell.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wisp_cli::commands;

/// WISP WAV toolbox
#[derive(Parser)]
#[command(name = "wisp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print format, duration, and content hash of a WAV file
    Info {
        /// Path to the WAV file
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the cue markers of a WAV file
    Cues {
        /// Path to the WAV file
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Estimate the noise floor of a WAV file
    NoiseFloor {
        /// Path to the WAV file
        input: String,

        /// RMS window length in seconds
        #[arg(long, default_value_t = 0.05)]
        chunk_duration: f64,

        /// Number of amplitude histogram segments (minimum 3)
        #[arg(long, default_value_t = 10)]
        segments: usize,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Re-encode a WAV file to the WISP profile (16-bit, 44.1 kHz, mono)
    Convert {
        /// Path to the input WAV file
        input: String,

        /// Path to write the converted file
        output: String,

        /// Replace cue markers with SECONDS:LABEL entries (repeatable);
        /// existing cues are preserved when omitted
        #[arg(long = "cue", value_name = "SECONDS:LABEL")]
        cues: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { input, json } => commands::info::run(&input, json),
        Commands::Cues { input, json } => commands::cues::run(&input, json),
        Commands::NoiseFloor {
            input,
            chunk_duration,
            segments,
            json,
        } => commands::noise_floor::run(&input, chunk_duration, segments, json),
        Commands::Convert {
            input,
            output,
            cues,
        } => commands::convert::run(&input, &output, &cues),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
