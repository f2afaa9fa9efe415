//! Generation session
//!
//! [`Session`] is the owned application state: the synthesizer seam, the
//! bounded clip history, and the single-request admission flag. All errors
//! from the pipeline propagate to the caller as [`VoxError`]; nothing is
//! retried and nothing is swallowed.

use log::{debug, info};

use crate::audio::decode_audio_data;
use crate::error::{Result, VoxError};
use crate::history::{ClipHistory, SpeechClip};
use crate::speech::{
    extract_audio, SpeechRequest, SpeechSynthesizer, Voice, OUTPUT_CHANNELS, OUTPUT_SAMPLE_RATE,
};

/// Maximum accepted input length in characters
pub const MAX_TEXT_LEN: usize = 1000;

/// Application state for one generation session
///
/// History mutation and generation both happen on the caller's thread; the
/// admission flag enforces the at-most-one-outstanding-request policy for
/// callers that drive this from an event loop.
pub struct Session {
    synthesizer: Box<dyn SpeechSynthesizer>,
    history: ClipHistory,
    in_flight: bool,
}

impl Session {
    /// Create a session around a synthesizer
    pub fn new(synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        Self {
            synthesizer,
            history: ClipHistory::new(),
            in_flight: false,
        }
    }

    /// Generate a speech clip and push it into history
    ///
    /// Validates input before the collaborator is touched, then runs the
    /// full pipeline: synthesize, normalize the response, decode the PCM
    /// payload, record the clip. Returns a reference to the new clip.
    ///
    /// # Errors
    /// * `InvalidInput` - empty/whitespace text, or text over
    ///   [`MAX_TEXT_LEN`] characters; no request is issued
    /// * `RequestInFlight` - a generation is already outstanding
    /// * any taxonomy error from the synthesizer, response normalization,
    ///   or PCM decoding
    pub fn generate(
        &mut self,
        text: &str,
        voice: Voice,
        mood: Option<&str>,
    ) -> Result<&SpeechClip> {
        if text.trim().is_empty() {
            return Err(VoxError::InvalidInput {
                reason: "text is empty".to_string(),
            });
        }
        if text.chars().count() > MAX_TEXT_LEN {
            return Err(VoxError::InvalidInput {
                reason: format!("text exceeds {} characters", MAX_TEXT_LEN),
            });
        }
        if self.in_flight {
            return Err(VoxError::RequestInFlight);
        }

        let request = SpeechRequest {
            text: text.to_string(),
            voice,
            mood: mood.map(str::to_string),
        };
        debug!("generating speech: voice={} chars={}", voice, text.len());

        self.in_flight = true;
        let result = self.synthesizer.synthesize(&request);
        self.in_flight = false;

        let pcm = extract_audio(&result?)?;
        let audio = decode_audio_data(&pcm, OUTPUT_SAMPLE_RATE, OUTPUT_CHANNELS)?;
        info!(
            "generated {:.2}s clip for {} chars of text",
            audio.duration_secs(),
            text.len()
        );

        self.history.push(SpeechClip::new(text, voice, audio));
        Ok(self.history.latest().expect("clip was just pushed"))
    }

    /// Retained clips, newest first
    pub fn history(&self) -> &ClipHistory {
        &self.history
    }

    /// Check if a generation request is outstanding
    pub fn is_generating(&self) -> bool {
        self.in_flight
    }

    /// Discard all retained clips
    pub fn clear(&mut self) {
        debug!("clearing {} clips", self.history.len());
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORY_CAPACITY;
    use crate::speech::{FailureMode, MockSynthesizer};

    fn session() -> Session {
        Session::new(Box::new(MockSynthesizer::new()))
    }

    #[test]
    fn test_generate_pushes_clip() {
        let mut session = session();
        let clip = session.generate("hello world", Voice::Kore, None).unwrap();

        assert_eq!(clip.text, "hello world");
        assert_eq!(clip.voice, Voice::Kore);
        assert_eq!(clip.audio.sample_rate(), OUTPUT_SAMPLE_RATE);
        assert_eq!(clip.audio.num_channels(), 1);
        assert!(!clip.audio.is_empty());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_empty_text_never_reaches_synthesizer() {
        let mut session = Session::new(Box::new(MockSynthesizer::failing(FailureMode::Network)));

        for text in ["", "   ", "\n\t "] {
            let result = session.generate(text, Voice::Kore, None);
            // InvalidInput, not the mock's network error: the collaborator
            // was never called
            assert!(matches!(result, Err(VoxError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_over_length_text_rejected() {
        let mut session = session();
        let text = "a".repeat(MAX_TEXT_LEN + 1);
        assert!(matches!(
            session.generate(&text, Voice::Kore, None),
            Err(VoxError::InvalidInput { .. })
        ));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_history_bound_after_eleven_generations() {
        let mut session = session();
        for i in 0..11 {
            session
                .generate(&format!("clip number {}", i), Voice::Puck, None)
                .unwrap();
        }

        let history = session.history();
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.clips()[0].text, "clip number 10");
        assert_eq!(history.clips()[9].text, "clip number 1");
    }

    #[test]
    fn test_upstream_failures_propagate() {
        let cases = [
            (FailureMode::NoContent, "UPSTREAM_NO_CONTENT"),
            (FailureMode::SafetyRejection, "UPSTREAM_SAFETY_REJECTION"),
            (FailureMode::TextOnly, "UPSTREAM_TEXT_ONLY"),
            (FailureMode::NoAudioData, "UPSTREAM_NO_AUDIO_DATA"),
            (FailureMode::Network, "NETWORK_OR_AUTH"),
        ];

        for (mode, code) in cases {
            let mut session = Session::new(Box::new(MockSynthesizer::failing(mode)));
            let err = session.generate("some text", Voice::Kore, None).unwrap_err();
            assert_eq!(err.error_code(), code);
            assert!(session.history().is_empty());
        }
    }

    #[test]
    fn test_failure_clears_admission_flag() {
        let mut session = Session::new(Box::new(MockSynthesizer::failing(FailureMode::Network)));
        assert!(session.generate("text", Voice::Kore, None).is_err());
        assert!(!session.is_generating());

        // Resubmission is not blocked: the next attempt reaches the
        // synthesizer again instead of failing with RequestInFlight
        assert!(matches!(
            session.generate("text", Voice::Kore, None),
            Err(VoxError::NetworkOrAuth { .. })
        ));
    }

    #[test]
    fn test_clear_discards_history() {
        let mut session = session();
        session.generate("one", Voice::Kore, None).unwrap();
        session.generate("two", Voice::Kore, None).unwrap();

        session.clear();
        assert!(session.history().is_empty());
    }
}
