use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::session::SessionState;
use crate::config::{ChatConfig, ConfigError};
use crate::modules::emotion::{EmotionLabel, KeywordClassifier};
use crate::modules::response::{PhrasePicker, ResponseSelector};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub emotion: EmotionLabel,
    pub reply: String,
    pub celebrate: bool,
}

/// Runs chat turns: classify the user's text, remember it, and answer with the
/// matching face and message.
#[derive(Debug, Clone, Default)]
pub struct EmotionMirror {
    classifier: KeywordClassifier,
    responses: ResponseSelector,
}

impl EmotionMirror {
    pub fn new(config: &ChatConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            classifier: KeywordClassifier::from_config(&config.keywords),
            responses: ResponseSelector::from_config(&config.responses)?,
        })
    }

    pub fn handle_user_input<P: PhrasePicker + ?Sized>(
        &self,
        state: &mut SessionState,
        text: &str,
        picker: &mut P,
    ) -> TurnOutcome {
        let emotion = self.classifier.classify(text);
        state.record_user_turn(emotion, text);

        let reply = self.responses.respond(emotion, picker);
        state.record_bot_reply(reply.clone());

        debug!(%emotion, messages = state.log().len(), "turn handled");

        TurnOutcome {
            emotion,
            reply,
            celebrate: emotion.is_celebratory(),
        }
    }

    pub fn reset_conversation(&self, state: &mut SessionState) {
        info!(discarded = state.log().len(), "conversation reset");
        state.reset();
    }
}
