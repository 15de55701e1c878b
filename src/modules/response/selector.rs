use super::faces::face_for;
use super::picker::PhrasePicker;
use crate::config::{ConfigError, ResponseConfig};
use crate::modules::emotion::EmotionLabel;

/// Maps an emotion to the bot's reply: the face banner followed by a message.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    happy: String,
    sad_support: Vec<String>,
    love: String,
    angry: String,
    neutral: String,
}

impl ResponseSelector {
    pub fn from_config(config: &ResponseConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        Ok(Self {
            happy: config.happy.clone(),
            sad_support: config.sad_support.clone(),
            love: config.love.clone(),
            angry: config.angry.clone(),
            neutral: config.neutral.clone(),
        })
    }

    pub fn support_phrases(&self) -> &[String] {
        &self.sad_support
    }

    /// Only `Sad` consults the picker; every other label is deterministic.
    pub fn message_for<P: PhrasePicker + ?Sized>(&self, label: EmotionLabel, picker: &mut P) -> &str {
        match label {
            EmotionLabel::Happy => &self.happy,
            EmotionLabel::Sad => {
                let index = picker.pick(self.sad_support.len()) % self.sad_support.len();
                &self.sad_support[index]
            }
            EmotionLabel::Love => &self.love,
            EmotionLabel::Angry => &self.angry,
            EmotionLabel::Neutral => &self.neutral,
        }
    }

    pub fn respond<P: PhrasePicker + ?Sized>(&self, label: EmotionLabel, picker: &mut P) -> String {
        format!("{}\n\n{}", face_for(label), self.message_for(label, picker))
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        let config = ResponseConfig::default();
        Self {
            happy: config.happy,
            sad_support: config.sad_support,
            love: config.love,
            angry: config.angry,
            neutral: config.neutral,
        }
    }
}
