//! Upstream response envelope
//!
//! Mirrors the wire shape of the generative speech API and normalizes it
//! into the crate error taxonomy in one place. Everything past
//! [`extract_audio`] works with plain PCM bytes; raw response shapes never
//! leak further in.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::warn;
use serde::Deserialize;

use crate::error::{Result, VoxError};

/// Finish reason reported when the safety filter rejects a request
const FINISH_REASON_SAFETY: &str = "SAFETY";

/// Top-level response from the speech model
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate completion
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

/// Candidate content: an ordered list of parts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content part; audio arrives as inline data, refusals as text
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded binary payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: Option<String>,
    pub data: String,
}

impl SpeechResponse {
    /// Parse a raw JSON response body
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Normalize a response into raw PCM bytes or a taxonomy error
///
/// Walks the first candidate's parts for inline audio data; the model may
/// interleave a text preamble before the audio part, so every part is
/// checked rather than just the first.
///
/// # Errors
/// * `UpstreamNoContent` - no candidate at all
/// * `UpstreamSafetyRejection` - the candidate was cut off by the safety
///   filter
/// * `UpstreamTextOnly` - the model answered in text instead of audio
/// * `UpstreamNoAudioData` - a candidate arrived with neither audio nor text
/// * `Decode` - the audio payload was not valid base64
pub fn extract_audio(response: &SpeechResponse) -> Result<Vec<u8>> {
    let candidate = response
        .candidates
        .first()
        .ok_or(VoxError::UpstreamNoContent)?;

    if candidate.finish_reason.as_deref() == Some(FINISH_REASON_SAFETY) {
        return Err(VoxError::UpstreamSafetyRejection);
    }

    let parts = candidate
        .content
        .as_ref()
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    if let Some(inline) = parts.iter().find_map(|part| part.inline_data.as_ref()) {
        return BASE64.decode(&inline.data).map_err(|e| VoxError::Decode {
            reason: format!("audio payload is not valid base64: {}", e),
        });
    }

    if parts.iter().any(|part| part.text.is_some()) {
        warn!("upstream returned a text part instead of audio");
        return Err(VoxError::UpstreamTextOnly);
    }

    Err(VoxError::UpstreamNoAudioData)
}
