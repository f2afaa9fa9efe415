//! CLI Module
//!
//! Command-line interface for the voxgen speech pipeline.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// voxgen - text-to-speech clip pipeline
#[derive(Parser, Debug)]
#[command(name = "voxgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a raw 16-bit LE PCM file to WAV
    #[command(name = "convert")]
    Convert {
        /// Raw PCM input file
        input: PathBuf,

        /// Sample rate of the input in Hz
        #[arg(long, default_value_t = 24000)]
        sample_rate: u32,

        /// Channel count of the interleaved input
        #[arg(long, default_value_t = 1)]
        channels: usize,

        /// Output path (defaults to the input with a .wav extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print format and duration of a WAV file
    #[command(name = "info")]
    Info {
        /// WAV file to inspect
        path: PathBuf,
    },

    /// List available voices
    #[command(name = "voices")]
    Voices,

    /// Generate a clip with the offline voice and export it as WAV
    #[command(name = "demo")]
    Demo {
        /// Text to speak
        text: String,

        /// Voice name
        #[arg(long, default_value = "kore")]
        voice: String,

        /// Speech tone, e.g. "cheerful" or "ghost story"
        #[arg(long)]
        mood: Option<String>,

        /// Output path (defaults to the clip's own file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
