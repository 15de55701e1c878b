use serde::{Deserialize, Serialize};

use super::log::{ConversationLog, Role};
use crate::modules::emotion::EmotionLabel;

/// Everything one chat session reads and writes. The host owns it and hands it
/// to [`EmotionMirror`](super::EmotionMirror) on every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    log: ConversationLog,
    current_emotion: EmotionLabel,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn current_emotion(&self) -> EmotionLabel {
        self.current_emotion
    }

    pub(crate) fn record_user_turn(&mut self, emotion: EmotionLabel, text: &str) {
        self.current_emotion = emotion;
        self.log.append(Role::User, text);
    }

    pub(crate) fn record_bot_reply(&mut self, reply: impl Into<String>) {
        self.log.append(Role::Bot, reply);
    }

    pub fn reset(&mut self) {
        self.log.clear();
        self.current_emotion = EmotionLabel::Neutral;
    }
}
