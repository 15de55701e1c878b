use std::os::raw::c_char;

use crate::api::{
    services::{
        session_service::{
            create_chat_session as create_session, format_conversation_json, format_emotion_json,
            format_session_info_json, format_turn_json, handle_input_in_session, parse_chat_config,
            remove_chat_session as remove_session, reset_session, with_chat_session,
        },
        validation_service::*,
    },
    types::ApiResult,
};
use crate::modules::response::RandomPicker;

#[no_mangle]
pub extern "C" fn create_chat_session(config_json: *const c_char) -> *mut ApiResult {
    let config_str = match parse_optional_c_string(config_json, "Config string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let config = match parse_chat_config(config_str.as_deref()) {
        Ok(c) => c,
        Err(e) => return ApiResult::error(e).into_raw(),
    };

    let session_id = match create_session(&config) {
        Ok(id) => id,
        Err(e) => return ApiResult::error(e).into_raw(),
    };

    let response_data = serde_json::json!({
        "session_id": session_id
    })
    .to_string();

    ApiResult::success(response_data).into_raw()
}

#[no_mangle]
pub extern "C" fn remove_chat_session(session_id: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    if let Err(e) = remove_session(&session_id_str) {
        return ApiResult::error(e).into_raw();
    }

    ApiResult::success(format!("Chat session '{}' removed successfully", session_id_str)).into_raw()
}

#[no_mangle]
pub extern "C" fn handle_user_input(session_id: *const c_char, text: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let text_str = match parse_c_string(text, "Text string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let mut picker = RandomPicker::thread();
    let result = handle_input_in_session(&session_id_str, &text_str, &mut picker)
        .and_then(|outcome| format_turn_json(&outcome));

    ApiResult::from(result).into_raw()
}

#[no_mangle]
pub extern "C" fn reset_conversation(session_id: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let result = reset_session(&session_id_str).map(|_| "Conversation reset successfully".to_string());
    ApiResult::from(result).into_raw()
}

#[no_mangle]
pub extern "C" fn get_conversation(session_id: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let result = with_chat_session(&session_id_str, |session| format_conversation_json(session));
    ApiResult::from(result).into_raw()
}

#[no_mangle]
pub extern "C" fn get_current_emotion(session_id: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let result = with_chat_session(&session_id_str, |session| Ok(format_emotion_json(session)));
    ApiResult::from(result).into_raw()
}

#[no_mangle]
pub extern "C" fn get_session_info(session_id: *const c_char) -> *mut ApiResult {
    let session_id_str = match parse_c_string(session_id, "Session ID string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let result = with_chat_session(&session_id_str, |session| {
        Ok(format_session_info_json(&session_id_str, session))
    });
    ApiResult::from(result).into_raw()
}

#[no_mangle]
pub extern "C" fn free_api_result(result: *mut ApiResult) {
    if result.is_null() {
        return;
    }

    unsafe {
        let result = Box::from_raw(result);
        if !result.data.is_null() {
            let _ = std::ffi::CString::from_raw(result.data);
        }
        if !result.error.is_null() {
            let _ = std::ffi::CString::from_raw(result.error);
        }
    }
}
