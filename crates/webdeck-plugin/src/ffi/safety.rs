//! Helpers for reading values handed over by plugin libraries.

use std::ffi::CStr;
use std::os::raw::c_char;

/// Copies a NUL-terminated C string into a Rust `String`.
///
/// Returns `None` for null pointers and non-UTF-8 data.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub unsafe fn c_str_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .ok()
        .map(str::to_string)
}
