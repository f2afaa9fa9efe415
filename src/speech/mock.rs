//! Mock synthesizer
//!
//! Produces deterministic sine-tone speech audio without touching the
//! network, and can be scripted to reproduce each upstream failure shape.
//! Useful for pipeline testing and for running the CLI offline.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::debug;

use crate::error::{Result, VoxError};
use crate::speech::response::{Candidate, Content, InlineData, Part, SpeechResponse};
use crate::speech::{SpeechRequest, SpeechSynthesizer, OUTPUT_SAMPLE_RATE};

/// Upstream failure shapes the mock can reproduce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Empty candidate list
    NoContent,
    /// Candidate cut off by the safety filter
    SafetyRejection,
    /// Text part instead of audio
    TextOnly,
    /// Candidate with no payload at all
    NoAudioData,
    /// Transport-level failure
    Network,
}

/// Deterministic offline stand-in for the speech model
///
/// Each voice gets a fixed pitch and the clip duration scales with word
/// count, so generated audio is stable across runs and distinguishable per
/// request.
#[derive(Debug, Default)]
pub struct MockSynthesizer {
    failure: Option<FailureMode>,
    calls: usize,
}

impl MockSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every request with the given shape
    pub fn failing(mode: FailureMode) -> Self {
        Self {
            failure: Some(mode),
            calls: 0,
        }
    }

    /// Number of synthesize calls received
    pub fn calls(&self) -> usize {
        self.calls
    }

    fn tone_frequency(request: &SpeechRequest) -> f32 {
        match request.voice.api_name() {
            "Charon" => 110.0,
            "Fenrir" => 130.0,
            "Zephyr" => 180.0,
            "Kore" => 200.0,
            "Puck" => 260.0,
            _ => 220.0,
        }
    }

    fn render_pcm(request: &SpeechRequest) -> Vec<u8> {
        let words = request.text.split_whitespace().count().max(1);
        let duration_secs = 0.3 + 0.06 * words as f32;
        let num_samples = (duration_secs * OUTPUT_SAMPLE_RATE as f32) as usize;

        let frequency = Self::tone_frequency(request);
        let angular = 2.0 * std::f32::consts::PI * frequency / OUTPUT_SAMPLE_RATE as f32;

        let mut pcm = Vec::with_capacity(num_samples * 2);
        for i in 0..num_samples {
            let sample = 0.4 * (angular * i as f32).sin();
            pcm.extend_from_slice(&((sample * 32767.0) as i16).to_le_bytes());
        }
        pcm
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    fn synthesize(&mut self, request: &SpeechRequest) -> Result<SpeechResponse> {
        self.calls += 1;
        debug!("mock synthesizing: {}", request.prompt());

        match self.failure {
            Some(FailureMode::NoContent) => Ok(SpeechResponse::default()),
            Some(FailureMode::SafetyRejection) => Ok(SpeechResponse {
                candidates: vec![Candidate {
                    content: None,
                    finish_reason: Some("SAFETY".to_string()),
                }],
            }),
            Some(FailureMode::TextOnly) => Ok(SpeechResponse {
                candidates: vec![Candidate {
                    content: Some(Content {
                        parts: vec![Part {
                            text: Some("I can only answer in text.".to_string()),
                            inline_data: None,
                        }],
                    }),
                    finish_reason: None,
                }],
            }),
            Some(FailureMode::NoAudioData) => Ok(SpeechResponse {
                candidates: vec![Candidate::default()],
            }),
            Some(FailureMode::Network) => Err(VoxError::NetworkOrAuth {
                message: "mock transport failure".to_string(),
            }),
            None => Ok(SpeechResponse {
                candidates: vec![Candidate {
                    content: Some(Content {
                        parts: vec![Part {
                            text: None,
                            inline_data: Some(InlineData {
                                mime_type: Some(format!(
                                    "audio/L16;rate={}",
                                    OUTPUT_SAMPLE_RATE
                                )),
                                data: BASE64.encode(Self::render_pcm(request)),
                            }),
                        }],
                    }),
                    finish_reason: Some("STOP".to_string()),
                }],
            }),
        }
    }
}
