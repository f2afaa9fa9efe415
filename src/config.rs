//! Runtime configuration
//!
//! A single API credential read from the process environment at startup.
//! Nothing else is configurable externally and nothing is persisted.

use std::env;

use crate::error::{Result, VoxError};

/// Environment variable holding the upstream API credential
pub const API_KEY_ENV: &str = "VOXGEN_API_KEY";

/// Environment variable overriding the speech model identifier
pub const MODEL_ENV: &str = "VOXGEN_TTS_MODEL";

/// Default speech model requested from the upstream API
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Upstream API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API credential
    pub api_key: String,
    /// Speech model identifier
    pub model: String,
}

impl ApiConfig {
    /// Read configuration from the process environment
    ///
    /// # Errors
    /// Returns `MissingCredential` when the key variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(VoxError::MissingCredential { var: API_KEY_ENV })?;

        let model = env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self { api_key, model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because the harness runs tests concurrently and these
    // mutate shared process environment.
    #[test]
    fn test_from_env() {
        env::remove_var(API_KEY_ENV);
        env::remove_var(MODEL_ENV);
        assert!(matches!(
            ApiConfig::from_env(),
            Err(VoxError::MissingCredential { var }) if var == API_KEY_ENV
        ));

        env::set_var(API_KEY_ENV, "   ");
        assert!(ApiConfig::from_env().is_err());

        env::set_var(API_KEY_ENV, "test-key");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, DEFAULT_MODEL);

        env::set_var(MODEL_ENV, "custom-model");
        assert_eq!(ApiConfig::from_env().unwrap().model, "custom-model");

        env::remove_var(API_KEY_ENV);
        env::remove_var(MODEL_ENV);
    }
}
