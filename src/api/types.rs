use std::ffi::CString;
use std::os::raw::c_char;

#[repr(C)]
pub struct ApiResult {
    pub success: u8,
    pub data: *mut c_char,
    pub error: *mut c_char,
}

pub type SessionId = String;

impl ApiResult {
    pub fn success(data: String) -> Self {
        let data_ptr = match CString::new(data) {
            Ok(cstring) => cstring.into_raw(),
            Err(_) => CString::from(c"Data contains invalid characters").into_raw(),
        };

        Self {
            success: 1,
            data: data_ptr,
            error: std::ptr::null_mut(),
        }
    }

    pub fn error(error: String) -> Self {
        let error_ptr = match CString::new(error) {
            Ok(cstring) => cstring.into_raw(),
            Err(_) => CString::from(c"Error message contains invalid characters").into_raw(),
        };

        Self {
            success: 0,
            data: std::ptr::null_mut(),
            error: error_ptr,
        }
    }

    pub fn into_raw(self) -> *mut ApiResult {
        Box::into_raw(Box::new(self))
    }
}

impl From<Result<String, String>> for ApiResult {
    fn from(result: Result<String, String>) -> Self {
        match result {
            Ok(data) => ApiResult::success(data),
            Err(error) => ApiResult::error(error),
        }
    }
}
