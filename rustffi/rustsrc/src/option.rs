use std::ffi::{c_char, CStr};

/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
pub unsafe fn nullable_cstr<'a>(ptr: *const c_char) -> Option<&'a CStr> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr))
    }
}
