//! Voices and prompt construction

use serde::{Deserialize, Serialize};

/// Available voices
///
/// `Adam` is an application-level voice: it is delivered through the
/// upstream "Charon" voice with a persona hint that pins down the intended
/// gender and timbre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Kore,
    Puck,
    Charon,
    Zephyr,
    Fenrir,
    Adam,
}

/// Moods accepted by the prompt builder; anything else falls back to the
/// generic tone framing.
pub const MOODS: &[&str] = &[
    "natural",
    "cheerful",
    "serious",
    "whispering",
    "excited",
    "sad",
    "angry",
    "ghost story",
];

impl Voice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kore => "kore",
            Self::Puck => "puck",
            Self::Charon => "charon",
            Self::Zephyr => "zephyr",
            Self::Fenrir => "fenrir",
            Self::Adam => "adam",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kore" => Some(Self::Kore),
            "puck" => Some(Self::Puck),
            "charon" => Some(Self::Charon),
            "zephyr" => Some(Self::Zephyr),
            "fenrir" => Some(Self::Fenrir),
            "adam" => Some(Self::Adam),
            _ => None,
        }
    }

    /// Prebuilt voice name sent to the upstream API
    pub fn api_name(&self) -> &'static str {
        match self {
            // Adam rides on Charon, the deepest male voice available
            Self::Adam => "Charon",
            Self::Kore => "Kore",
            Self::Puck => "Puck",
            Self::Charon => "Charon",
            Self::Zephyr => "Zephyr",
            Self::Fenrir => "Fenrir",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Adam => "Deep, masculine and narrative",
            Self::Kore => "Warm and professional",
            Self::Puck => "Energetic and youthful",
            Self::Charon => "Deep and authoritative",
            Self::Zephyr => "Calm and soothing",
            Self::Fenrir => "Strong and narrative",
        }
    }

    /// Persona framing prepended to every prompt
    fn persona_hint(&self) -> &'static str {
        match self {
            Self::Adam => "As a man with a deep, strong masculine voice",
            _ => "As a narrator",
        }
    }

    /// All voices, in presentation order
    pub fn all() -> &'static [Voice] {
        &[
            Self::Adam,
            Self::Kore,
            Self::Puck,
            Self::Charon,
            Self::Zephyr,
            Self::Fenrir,
        ]
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the synthesis prompt for a voice, text and optional mood
///
/// The ghost-story mood gets an extended dramatic-narration framing; other
/// non-natural moods use the generic tone form; no mood (or "natural")
/// yields the plain form. The persona hint always leads.
pub fn build_prompt(text: &str, voice: Voice, mood: Option<&str>) -> String {
    let persona = voice.persona_hint();

    match mood {
        Some("ghost story") => format!(
            "{}, narrate this as a haunting ghost story. Use dramatic pauses, \
             a chilling atmosphere, and a slow, suspenseful pace: {}",
            persona, text
        ),
        Some(mood) if mood != "natural" => {
            format!("{}, say this with a {} tone: {}", persona, mood, text)
        }
        _ => format!("{}, say: {}", persona, text),
    }
}
