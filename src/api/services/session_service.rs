use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::api::services::validation_service::validate_session_id;
use crate::api::types::SessionId;
use crate::config::ChatConfig;
use crate::modules::conversation::{EmotionMirror, SessionState, TurnOutcome};
use crate::modules::response::{face_for, PhrasePicker};

lazy_static! {
    static ref CHAT_SESSIONS: Mutex<HashMap<SessionId, ChatSession>> = Mutex::new(HashMap::new());
}

pub struct ChatSession {
    pub mirror: EmotionMirror,
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(config: &ChatConfig) -> Result<Self, String> {
        let mirror = EmotionMirror::new(config).map_err(|e| format!("Failed to build chat session: {}", e))?;
        Ok(Self {
            mirror,
            state: SessionState::new(),
            created_at: Utc::now(),
        })
    }
}

fn get_chat_sessions() -> Result<MutexGuard<'static, HashMap<SessionId, ChatSession>>, String> {
    CHAT_SESSIONS
        .lock()
        .map_err(|_| "Failed to acquire session lock - mutex poisoned".to_string())
}

pub fn parse_chat_config(config_json: Option<&str>) -> Result<ChatConfig, String> {
    match config_json.map(str::trim) {
        None | Some("") => Ok(ChatConfig::default()),
        Some(json) => ChatConfig::from_json_str(json).map_err(|e| format!("Failed to parse config: {}", e)),
    }
}

pub fn create_chat_session(config: &ChatConfig) -> Result<SessionId, String> {
    let session = ChatSession::new(config)?;
    let session_id = uuid::Uuid::new_v4().to_string();

    let mut sessions = get_chat_sessions()?;
    if sessions.contains_key(&session_id) {
        return Err(format!("Chat session '{}' already exists", session_id));
    }
    sessions.insert(session_id.clone(), session);

    info!(%session_id, "chat session created");
    Ok(session_id)
}

pub fn remove_chat_session(session_id: &str) -> Result<(), String> {
    validate_session_id(session_id)?;

    let mut sessions = get_chat_sessions()?;
    if sessions.remove(session_id).is_none() {
        return Err(format!("Chat session '{}' not found", session_id));
    }

    info!(%session_id, "chat session removed");
    Ok(())
}

pub fn with_chat_session<F, T>(session_id: &str, f: F) -> Result<T, String>
where
    F: FnOnce(&mut ChatSession) -> Result<T, String>,
{
    validate_session_id(session_id)?;

    let mut sessions = get_chat_sessions()?;
    let session = sessions.get_mut(session_id).ok_or_else(|| {
        format!("Chat session '{}' not found. Call create_chat_session first.", session_id)
    })?;

    f(session)
}

pub fn session_count() -> Result<usize, String> {
    Ok(get_chat_sessions()?.len())
}

pub fn handle_input_in_session<P: PhrasePicker + ?Sized>(
    session_id: &str,
    text: &str,
    picker: &mut P,
) -> Result<TurnOutcome, String> {
    with_chat_session(session_id, |session| {
        Ok(session.mirror.handle_user_input(&mut session.state, text, picker))
    })
}

pub fn reset_session(session_id: &str) -> Result<(), String> {
    with_chat_session(session_id, |session| {
        session.mirror.reset_conversation(&mut session.state);
        Ok(())
    })
}

pub fn format_turn_json(outcome: &TurnOutcome) -> Result<String, String> {
    serde_json::to_string(outcome).map_err(|e| format!("Failed to serialize turn: {}", e))
}

pub fn format_conversation_json(session: &ChatSession) -> Result<String, String> {
    serde_json::to_string(session.state.log()).map_err(|e| format!("Failed to serialize conversation: {}", e))
}

pub fn format_emotion_json(session: &ChatSession) -> String {
    let emotion = session.state.current_emotion();
    serde_json::json!({
        "emotion": emotion,
        "face": face_for(emotion),
    })
    .to_string()
}

pub fn format_session_info_json(session_id: &str, session: &ChatSession) -> String {
    serde_json::json!({
        "session_id": session_id,
        "created_at": session.created_at.to_rfc3339(),
        "message_count": session.state.log().len(),
        "current_emotion": session.state.current_emotion(),
    })
    .to_string()
}
