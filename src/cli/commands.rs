//! CLI command handlers

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::audio::{audio_buffer_to_wav, decode_audio_data};
use crate::config::{ApiConfig, API_KEY_ENV};
use crate::playback::{NullSink, PlaybackEvent, Player};
use crate::session::Session;
use crate::speech::{MockSynthesizer, Voice, MOODS};

/// Decode a raw PCM file and write it back out as WAV
pub fn convert(
    input: &Path,
    sample_rate: u32,
    channels: usize,
    output: Option<&Path>,
) -> Result<()> {
    let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;

    let buffer = decode_audio_data(&bytes, sample_rate, channels)
        .with_context(|| format!("decoding {}", input.display()))?;
    info!(
        "decoded {} frames ({:.2}s, {} ch @ {} Hz)",
        buffer.num_samples(),
        buffer.duration_secs(),
        buffer.num_channels(),
        buffer.sample_rate()
    );

    let target = output
        .map(PathBuf::from)
        .unwrap_or_else(|| input.with_extension("wav"));
    fs::write(&target, audio_buffer_to_wav(&buffer))
        .with_context(|| format!("writing {}", target.display()))?;

    println!("wrote {}", target.display());
    Ok(())
}

/// Print the format and duration of a WAV file
pub fn info(path: &Path) -> Result<()> {
    let reader = hound::WavReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let spec = reader.spec();
    let frames = reader.duration();
    let secs = frames as f64 / spec.sample_rate as f64;

    println!("{}", path.display());
    println!("  channels:        {}", spec.channels);
    println!("  sample rate:     {} Hz", spec.sample_rate);
    println!("  bits per sample: {}", spec.bits_per_sample);
    println!("  frames:          {}", frames);
    println!("  duration:        {:.3}s", secs);
    Ok(())
}

/// List available voices and moods
pub fn voices() -> Result<()> {
    for voice in Voice::all() {
        println!("{:<8} {}", voice.as_str(), voice.description());
    }
    println!();
    println!("moods: {}", MOODS.join(", "));
    Ok(())
}

/// Run the full pipeline against the offline voice and export the clip
pub fn demo(text: &str, voice: &str, mood: Option<&str>, output: Option<&Path>) -> Result<()> {
    let Some(voice) = Voice::from_str(voice) else {
        bail!(
            "unknown voice '{}'; available: {}",
            voice,
            Voice::all()
                .iter()
                .map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    };

    if ApiConfig::from_env().is_err() {
        warn!("{} not set; using the builtin offline voice", API_KEY_ENV);
    }

    let mut session = Session::new(Box::new(MockSynthesizer::new()));
    let clip = session
        .generate(text, voice, mood)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    // Drive playback to its natural end through the null sink
    let mut player = Player::new(Box::new(NullSink));
    player.play(&clip.audio)?;
    let chunk = clip.audio.sample_rate() as u64 / 10;
    while player.advance(chunk) != Some(PlaybackEvent::Finished) {}
    info!("playback finished ({:.2}s)", clip.audio.duration_secs());

    let target = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(clip.file_name()));
    fs::write(&target, clip.to_wav())
        .with_context(|| format!("writing {}", target.display()))?;

    println!(
        "wrote {} ({:.2}s, voice {})",
        target.display(),
        clip.audio.duration_secs(),
        clip.voice
    );
    Ok(())
}
