use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::config::{ChatConfig, WidgetText};
use crate::modules::conversation::{EmotionMirror, SessionState};
use crate::modules::response::{face_for, PhrasePicker};

#[cfg(target_arch = "wasm32")]
struct JsMathPicker;

#[cfg(target_arch = "wasm32")]
impl PhrasePicker for JsMathPicker {
    fn pick(&mut self, len: usize) -> usize {
        (js_sys::Math::random() * len as f64) as usize
    }
}

#[cfg(target_arch = "wasm32")]
fn default_picker() -> Box<dyn PhrasePicker> {
    console_error_panic_hook::set_once();
    Box::new(JsMathPicker)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_picker() -> Box<dyn PhrasePicker> {
    Box::new(crate::modules::response::RandomPicker::thread())
}

/// Browser-facing chat session. The page keeps one instance alive for the
/// lifetime of the tab and re-renders from its getters after every call.
#[wasm_bindgen]
pub struct ChatWidget {
    mirror: EmotionMirror,
    state: SessionState,
    text: WidgetText,
    picker: Box<dyn PhrasePicker>,
}

#[wasm_bindgen]
impl ChatWidget {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChatWidget {
        Self::with_picker(EmotionMirror::default(), WidgetText::default(), default_picker())
    }

    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(config_json: &str) -> Result<ChatWidget, String> {
        let config = ChatConfig::from_json_str(config_json).map_err(|e| e.to_string())?;
        let mirror = EmotionMirror::new(&config).map_err(|e| e.to_string())?;
        Ok(Self::with_picker(mirror, config.widget, default_picker()))
    }

    /// Runs one turn and returns the bot's reply.
    #[wasm_bindgen(js_name = handleUserInput)]
    pub fn handle_user_input(&mut self, text: &str) -> String {
        let outcome = self.mirror.handle_user_input(&mut self.state, text, self.picker.as_mut());
        debug!(emotion = %outcome.emotion, celebrate = outcome.celebrate, "widget turn");
        outcome.reply
    }

    #[wasm_bindgen(js_name = resetConversation)]
    pub fn reset_conversation(&mut self) {
        self.mirror.reset_conversation(&mut self.state);
    }

    #[wasm_bindgen(js_name = currentEmotion)]
    pub fn current_emotion(&self) -> String {
        self.state.current_emotion().to_string()
    }

    #[wasm_bindgen(js_name = currentFace)]
    pub fn current_face(&self) -> String {
        face_for(self.state.current_emotion()).to_string()
    }

    #[wasm_bindgen(js_name = shouldCelebrate)]
    pub fn should_celebrate(&self) -> bool {
        self.state.current_emotion().is_celebratory()
    }

    #[wasm_bindgen(js_name = messagesJson)]
    pub fn messages_json(&self) -> String {
        serde_json::to_string(self.state.log()).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen(js_name = messageCount)]
    pub fn message_count(&self) -> usize {
        self.state.log().len()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.text.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn subtitle(&self) -> String {
        self.text.subtitle.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn placeholder(&self) -> String {
        self.text.placeholder.clone()
    }
}

impl ChatWidget {
    pub fn with_picker(mirror: EmotionMirror, text: WidgetText, picker: Box<dyn PhrasePicker>) -> Self {
        Self {
            mirror,
            state: SessionState::new(),
            text,
            picker,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ChatWidget;
    use crate::config::{WidgetText, DEFAULT_SUPPORT_PHRASES};
    use crate::modules::conversation::EmotionMirror;
    use crate::modules::emotion::EmotionLabel;
    use crate::modules::response::{face_for, FixedPicker};

    #[test]
    fn test_widget_defaults() {
        let widget = ChatWidget::new();
        assert_eq!(widget.current_emotion(), "neutral");
        assert_eq!(widget.current_face(), face_for(EmotionLabel::Neutral));
        assert!(!widget.should_celebrate());
        assert_eq!(widget.messages_json(), "[]");
        assert_eq!(widget.placeholder(), "How are you feeling today?");
    }

    #[test]
    fn test_widget_turns_and_reset() {
        let mut widget = ChatWidget::with_picker(EmotionMirror::default(), WidgetText::default(), Box::new(FixedPicker(2)));

        let reply = widget.handle_user_input("I'm so lonely");
        assert!(reply.ends_with(DEFAULT_SUPPORT_PHRASES[2]));
        assert_eq!(widget.current_emotion(), "sad");
        assert_eq!(widget.message_count(), 2);

        widget.handle_user_input("this is fantastic");
        assert!(widget.should_celebrate());
        assert_eq!(widget.current_face(), face_for(EmotionLabel::Happy));

        let json = widget.messages_json();
        assert!(json.starts_with(r#"[{"role":"user","content":"I'm so lonely"}"#));

        widget.reset_conversation();
        assert_eq!(widget.message_count(), 0);
        assert_eq!(widget.current_emotion(), "neutral");
        assert!(widget.state().log().is_empty());
    }

    #[test]
    fn test_widget_with_config_json() {
        let widget = ChatWidget::with_config_json(r#"{"widget": {"title": "Mood"}}"#).unwrap();
        assert_eq!(widget.title(), "Mood");

        let err = ChatWidget::with_config_json(r#"{"responses": {"sad_support": []}}"#).err().unwrap();
        assert!(err.contains("Invalid config"));
    }
}
