//! C ABI for the `calculator` core.
//!
//! Every function takes host `double` operands, narrows them to the build's
//! `Float`, calls the core and widens the result back. `calculator_divide`
//! keeps the NaN sentinel; `calculator_checked_divide` and
//! `calculator_evaluate` report failures through [`FFIResult`] instead, for
//! hosts that want to raise.

mod error;
mod numbers;
mod option;
mod result;

use std::ffi::c_char;

use calculator::{Expression, Operator};

pub use crate::error::FFIError;
pub use crate::numbers::HostFloat;
pub use crate::result::FFIResult;
use crate::numbers::{to_core, to_host};
use crate::option::nullable_cstr;

fn apply(op: Operator, a: HostFloat, b: HostFloat) -> HostFloat {
    to_host(op.apply(to_core(a), to_core(b)))
}

#[no_mangle]
pub extern "C" fn calculator_add(a: HostFloat, b: HostFloat) -> HostFloat {
    apply(Operator::Add, a, b)
}

#[no_mangle]
pub extern "C" fn calculator_subtract(a: HostFloat, b: HostFloat) -> HostFloat {
    apply(Operator::Subtract, a, b)
}

#[no_mangle]
pub extern "C" fn calculator_multiply(a: HostFloat, b: HostFloat) -> HostFloat {
    apply(Operator::Multiply, a, b)
}

/// Returns NaN when `b` is exactly zero.
#[no_mangle]
pub extern "C" fn calculator_divide(a: HostFloat, b: HostFloat) -> HostFloat {
    apply(Operator::Divide, a, b)
}

/// Like `calculator_divide`, but an exact zero divisor is an error result.
///
/// The result must be released with `calculator_result_free`.
#[no_mangle]
pub extern "C" fn calculator_checked_divide(a: HostFloat, b: HostFloat) -> FFIResult<HostFloat> {
    match calculator::checked_divide(to_core(a), to_core(b)) {
        Ok(value) => FFIResult::ok(to_host(value)),
        Err(e) => FFIResult::err(e),
    }
}

/// Evaluates a single binary expression such as `"2 + 3"`.
///
/// The result must be released with `calculator_result_free`.
///
/// # Safety
///
/// `expression` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn calculator_evaluate(expression: *const c_char) -> FFIResult<HostFloat> {
    match evaluate(expression) {
        Ok(value) => FFIResult::ok(value),
        Err(e) => {
            tracing::debug!(error = %e, "expression evaluation failed");
            FFIResult::err(e)
        }
    }
}

unsafe fn evaluate(expression: *const c_char) -> Result<HostFloat, FFIError> {
    let text = nullable_cstr(expression)
        .ok_or(FFIError::NullPointer)?
        .to_str()?;
    let value = text.parse::<Expression>()?.evaluate()?;
    Ok(to_host(value))
}

/// Frees a result returned by this library.
///
/// # Safety
///
/// `result` must come from this library and must not be used or freed again.
#[no_mangle]
pub unsafe extern "C" fn calculator_result_free(result: FFIResult<HostFloat>) {
    result.free();
}
