pub mod chat_config;

pub use chat_config::{ChatConfig, ConfigError, KeywordConfig, ResponseConfig, WidgetText, DEFAULT_SUPPORT_PHRASES};
