//! voxgen - Text-to-Speech Clip Pipeline
//!
//! voxgen turns text into playable, downloadable speech clips:
//! 1. A prompt built from text, voice and mood goes to a generative speech
//!    collaborator behind the [`speech::SpeechSynthesizer`] seam.
//! 2. The raw 16-bit PCM response is decoded into an [`audio::AudioBuffer`].
//! 3. Clips can be previewed through the [`playback::Player`] state machine
//!    and exported as canonical WAV files.
//! 4. A bounded, in-memory [`history::ClipHistory`] retains the ten most
//!    recent clips.
//!
//! # Architecture
//!
//! The audio core ([`audio`]) is pure and deterministic; everything with a
//! side effect (the upstream call, playback, the CLI) sits behind a seam so
//! the pipeline is testable offline.

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod playback;
pub mod session;
pub mod speech;

pub use error::{Result, VoxError};
