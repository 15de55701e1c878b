pub mod config;
pub mod modules;
pub mod api;
pub mod web;

#[cfg(test)]
mod _test_mock;

pub use config::{ChatConfig, ConfigError, KeywordConfig, ResponseConfig, WidgetText};
pub use modules::conversation::{ConversationLog, EmotionMirror, Message, Role, SessionState, TurnOutcome};
pub use modules::emotion::{classify, EmotionError, EmotionLabel, KeywordClassifier, KeywordRule};
pub use modules::response::{face_for, FixedPicker, PhrasePicker, RandomPicker, ResponseSelector};
pub use web::ChatWidget;
