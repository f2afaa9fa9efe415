//! Error handling for voxgen
//!
//! Upstream failures are normalized into this taxonomy at the response
//! boundary; internal code never inspects raw response shapes.

use thiserror::Error;

/// Result type alias for voxgen operations
pub type Result<T> = std::result::Result<T, VoxError>;

/// Main error type for voxgen operations
#[derive(Error, Debug)]
pub enum VoxError {
    // Input Errors
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("A generation request is already in flight")]
    RequestInFlight,

    // Upstream Errors
    #[error("The model returned no candidate response")]
    UpstreamNoContent,

    #[error("The request was rejected by the upstream safety filter")]
    UpstreamSafetyRejection,

    #[error("The model returned text instead of audio")]
    UpstreamTextOnly,

    #[error("The model response contained no audio payload")]
    UpstreamNoAudioData,

    #[error("Network or authentication failure: {message}")]
    NetworkOrAuth { message: String },

    // Codec Errors
    #[error("PCM decode failed: {reason}")]
    Decode { reason: String },

    // Configuration Errors
    #[error("Missing API credential: set {var}")]
    MissingCredential { var: &'static str },

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VoxError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            VoxError::InvalidInput { .. } => "INVALID_INPUT",
            VoxError::RequestInFlight => "REQUEST_IN_FLIGHT",
            VoxError::UpstreamNoContent => "UPSTREAM_NO_CONTENT",
            VoxError::UpstreamSafetyRejection => "UPSTREAM_SAFETY_REJECTION",
            VoxError::UpstreamTextOnly => "UPSTREAM_TEXT_ONLY",
            VoxError::UpstreamNoAudioData => "UPSTREAM_NO_AUDIO_DATA",
            VoxError::NetworkOrAuth { .. } => "NETWORK_OR_AUTH",
            VoxError::Decode { .. } => "DECODE_ERROR",
            VoxError::MissingCredential { .. } => "MISSING_CREDENTIAL",
            VoxError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if resubmitting the same request could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            VoxError::RequestInFlight
                | VoxError::UpstreamNoContent
                | VoxError::NetworkOrAuth { .. }
        )
    }

    /// Get the single user-visible message for this error
    ///
    /// Every failure in the generation pipeline surfaces to the caller as
    /// exactly one of these strings; nothing is silently swallowed.
    pub fn user_message(&self) -> String {
        match self {
            VoxError::InvalidInput { .. } => "Please enter some text to speak.".to_string(),
            VoxError::RequestInFlight => {
                "A clip is still being generated. Wait for it to finish before starting another."
                    .to_string()
            }
            VoxError::UpstreamNoContent => {
                "The model did not return any content. Check your connection or API key."
                    .to_string()
            }
            VoxError::UpstreamSafetyRejection => {
                "This text was flagged by safety filters. Please try a different story.".to_string()
            }
            VoxError::UpstreamTextOnly => {
                "The AI provided a text response instead of speech. Try simpler text.".to_string()
            }
            VoxError::UpstreamNoAudioData => {
                "Speech synthesis failed: No audio data was generated.".to_string()
            }
            VoxError::NetworkOrAuth { message } => message.clone(),
            _ => self.to_string(),
        }
    }
}
