use std::{
    ffi::{c_char, CStr, CString},
    fmt::Display,
};

/// Either a boxed value or an error message. Exactly one pointer is non-null.
///
/// Both pointers are owned by this library and must be released with
/// `calculator_result_free`.
#[repr(C)]
pub struct FFIResult<T> {
    ok: *const T,
    err: *const c_char,
}

impl<T> FFIResult<T> {
    pub fn ok(value: T) -> Self {
        Self {
            ok: Box::into_raw(Box::new(value)),
            err: std::ptr::null(),
        }
    }

    pub fn err<E: Display>(value: E) -> Self {
        // interior NULs would truncate the message on the C side
        let message = value.to_string().replace('\0', "");
        let err = CString::new(message).unwrap_or_default();

        Self {
            ok: std::ptr::null(),
            err: err.into_raw(),
        }
    }

    pub fn is_ok(&self) -> bool {
        !self.ok.is_null()
    }

    pub fn ok_value(&self) -> Option<&T> {
        // SAFETY: `ok` is either null or a live box created in `ok`.
        unsafe { self.ok.as_ref() }
    }

    pub fn err_message(&self) -> Option<&str> {
        if self.err.is_null() {
            return None;
        }
        // SAFETY: `err` is a live CString created in `err`.
        unsafe { CStr::from_ptr(self.err) }.to_str().ok()
    }

    /// Releases both members.
    ///
    /// # Safety
    ///
    /// The result must have been created by this library and not freed before.
    pub unsafe fn free(self) {
        if !self.ok.is_null() {
            drop(Box::from_raw(self.ok as *mut T));
        }
        if !self.err.is_null() {
            drop(CString::from_raw(self.err as *mut c_char));
        }
    }
}
