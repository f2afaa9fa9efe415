//! Upstream speech collaborator
//!
//! This module holds everything that faces the generative speech API:
//! - voices and prompt construction
//! - the response envelope and its normalization into the error taxonomy
//! - the [`SpeechSynthesizer`] seam, with a deterministic mock
//!
//! The API itself is an opaque collaborator; it hands back base64 raw PCM
//! at a fixed rate, or one of the failure shapes of
//! [`response::extract_audio`].

mod mock;
pub mod response;
mod voice;

pub use mock::{FailureMode, MockSynthesizer};
pub use response::{extract_audio, SpeechResponse};
pub use voice::{build_prompt, Voice, MOODS};

use crate::error::Result;

/// Sample rate of upstream speech audio in Hz
pub const OUTPUT_SAMPLE_RATE: u32 = 24000;

/// Channel count of upstream speech audio (mono)
pub const OUTPUT_CHANNELS: usize = 1;

/// One synthesis request
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Raw user text; prompt framing is applied by the synthesizer
    pub text: String,
    /// Requested voice
    pub voice: Voice,
    /// Optional mood, see [`MOODS`]
    pub mood: Option<String>,
}

impl SpeechRequest {
    /// Full prompt sent upstream for this request
    pub fn prompt(&self) -> String {
        build_prompt(&self.text, self.voice, self.mood.as_deref())
    }
}

/// Seam for the generative speech API
///
/// Implementations return the raw response envelope; callers normalize it
/// with [`extract_audio`]. Transport or credential failures map to
/// `NetworkOrAuth`, preserving the collaborator's original message.
pub trait SpeechSynthesizer {
    fn synthesize(&mut self, request: &SpeechRequest) -> Result<SpeechResponse>;
}
