//! voxgen CLI - Text-to-Speech Clip Pipeline
//!
//! Command-line interface for the voxgen speech pipeline.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use voxgen::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("voxgen v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("voxgen v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Convert {
            input,
            sample_rate,
            channels,
            output,
        } => commands::convert(&input, sample_rate, channels, output.as_deref()),
        Commands::Info { path } => commands::info(&path),
        Commands::Voices => commands::voices(),
        Commands::Demo {
            text,
            voice,
            mood,
            output,
        } => commands::demo(&text, &voice, mood.as_deref(), output.as_deref()),
    }
}
