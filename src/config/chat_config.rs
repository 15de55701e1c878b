use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::modules::emotion::keywords::{to_owned_strings, ANGRY_WORDS, LOVE_WORDS, NEGATIVE_WORDS, POSITIVE_WORDS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetText {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
}

impl WidgetText {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            placeholder: placeholder.into(),
        }
    }
}

impl Default for WidgetText {
    fn default() -> Self {
        Self::new(
            "✨ Emotion Mirror Chatbot",
            "I'm a reactive AI agent that mirrors your emotions! Try words like happy, sad, love, or awesome",
            "How are you feeling today?",
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub love: Vec<String>,
    pub angry: Vec<String>,
}

impl KeywordConfig {
    pub fn validate(&self) -> Result<(), String> {
        let sets = [
            ("positive", &self.positive),
            ("negative", &self.negative),
            ("love", &self.love),
            ("angry", &self.angry),
        ];

        for (name, words) in sets {
            if let Some(index) = words.iter().position(|w| w.trim().is_empty()) {
                return Err(format!("Keyword set '{}' has a blank entry at index {}", name, index));
            }
        }

        Ok(())
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            positive: to_owned_strings(POSITIVE_WORDS),
            negative: to_owned_strings(NEGATIVE_WORDS),
            love: to_owned_strings(LOVE_WORDS),
            angry: to_owned_strings(ANGRY_WORDS),
        }
    }
}

pub const DEFAULT_SUPPORT_PHRASES: [&str; 6] = [
    "Would you like to talk about it? 💬",
    "I'm here to listen whenever you need 💙",
    "Want some uplifting quotes? 📜",
    "Would a virtual hug help? 🤗",
    "Let's focus on something positive 🌈",
    "Remember: this too shall pass 🌤️",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    pub happy: String,
    pub sad_support: Vec<String>,
    pub love: String,
    pub angry: String,
    pub neutral: String,
}

impl ResponseConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.sad_support.is_empty() {
            return Err("At least one supportive phrase is required for sad replies".to_string());
        }
        Ok(())
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            happy: "🌟 That's wonderful to hear! Keep spreading positivity!".to_string(),
            sad_support: to_owned_strings(&DEFAULT_SUPPORT_PHRASES),
            love: "💖 Love is the most beautiful feeling! Treasure it.".to_string(),
            angry: "☁️ Take a deep breath. Count to ten. You've got this.".to_string(),
            neutral: "Tell me more about your feelings...".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub widget: WidgetText,
    pub keywords: KeywordConfig,
    pub responses: ResponseConfig,
}

impl ChatConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ChatConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: ChatConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.keywords.validate().map_err(ConfigError::Invalid)?;
        self.responses.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}
