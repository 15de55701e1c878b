use std::ffi::CStr;
use std::os::raw::c_char;
use tracing::warn;

use crate::api::types::ApiResult;

pub fn parse_c_string(ptr: *const c_char, field_name: &str) -> Result<String, *mut ApiResult> {
    if ptr.is_null() {
        warn!(field = field_name, "rejected null string argument");
        return Err(ApiResult::error(format!("{} is null", field_name)).into_raw());
    }

    unsafe {
        match CStr::from_ptr(ptr).to_str() {
            Ok(s) => Ok(s.to_string()),
            Err(_) => {
                warn!(field = field_name, "rejected non UTF-8 string argument");
                Err(ApiResult::error(format!("Invalid UTF-8 string for {}", field_name)).into_raw())
            }
        }
    }
}

/// Null means "not provided"; a non-null pointer must still hold valid UTF-8.
pub fn parse_optional_c_string(ptr: *const c_char, field_name: &str) -> Result<Option<String>, *mut ApiResult> {
    if ptr.is_null() {
        return Ok(None);
    }

    parse_c_string(ptr, field_name).map(Some)
}

pub fn validate_session_id(session_id: &str) -> Result<(), String> {
    if session_id.trim().is_empty() {
        return Err("Session ID is empty".to_string());
    }
    uuid::Uuid::parse_str(session_id)
        .map(|_| ())
        .map_err(|_| format!("Session ID '{}' is not a valid UUID", session_id))
}
