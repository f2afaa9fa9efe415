//! Clip history
//!
//! Generated clips are retained in a bounded most-recent-first list. The
//! eviction rule is the pure function [`push_clip`]; nothing here persists
//! anywhere, history is in-memory only.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::audio::{audio_buffer_to_wav, AudioBuffer};
use crate::speech::Voice;

/// Default number of clips retained before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 10;

/// A generated speech clip and its provenance.
#[derive(Debug, Clone)]
pub struct SpeechClip {
    /// Unique identifier for this clip.
    pub id: String,

    /// The text the clip was generated from.
    pub text: String,

    /// Voice used for generation.
    pub voice: Voice,

    /// When the clip was generated.
    pub created_at: DateTime<Utc>,

    /// Decoded audio, owned by the clip until it is evicted.
    pub audio: AudioBuffer,
}

impl SpeechClip {
    /// Create a clip with a generated UUID and the current timestamp.
    pub fn new(text: impl Into<String>, voice: Voice, audio: AudioBuffer) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            voice,
            created_at: Utc::now(),
            audio,
        }
    }

    /// Deterministic download file name for this clip.
    pub fn file_name(&self) -> String {
        format!("clip-{}.wav", self.id)
    }

    /// Encode the clip's audio as a complete WAV file.
    pub fn to_wav(&self) -> Vec<u8> {
        audio_buffer_to_wav(&self.audio)
    }
}

/// Bounded most-recent-first clip list.
#[derive(Debug, Clone, Default)]
pub struct ClipHistory {
    clips: Vec<SpeechClip>,
}

/// Prepend a clip and evict beyond [`HISTORY_CAPACITY`].
///
/// Pure update: consumes the old history and returns the new one. The
/// newest clip is always at index 0.
pub fn push_clip(mut history: ClipHistory, clip: SpeechClip) -> ClipHistory {
    history.clips.insert(0, clip);
    history.clips.truncate(HISTORY_CAPACITY);
    history
}

impl ClipHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clip, evicting the oldest beyond capacity.
    pub fn push(&mut self, clip: SpeechClip) {
        *self = push_clip(std::mem::take(self), clip);
    }

    /// Clips in descending recency order (newest first).
    pub fn clips(&self) -> &[SpeechClip] {
        &self.clips
    }

    /// Most recently generated clip, if any.
    pub fn latest(&self) -> Option<&SpeechClip> {
        self.clips.first()
    }

    /// Look up a clip by id.
    pub fn get(&self, id: &str) -> Option<&SpeechClip> {
        self.clips.iter().find(|clip| clip.id == id)
    }

    /// Number of retained clips.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Check if no clips are retained.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Discard all clips.
    pub fn clear(&mut self) {
        self.clips.clear();
    }
}
