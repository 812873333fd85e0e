use crate::{CalcError, Float};

pub fn add(a: Float, b: Float) -> Float {
    a + b
}

pub fn subtract(a: Float, b: Float) -> Float {
    a - b
}

pub fn multiply(a: Float, b: Float) -> Float {
    a * b
}

/// Divides `a` by `b`.
///
/// A divisor of exactly `0.0` (either sign) yields NaN instead of the IEEE
/// infinity, so the result can be tested with [`is_undefined`]. A warning is
/// logged on that path; it carries no part of the contract.
pub fn divide(a: Float, b: Float) -> Float {
    if b != 0.0 {
        a / b
    } else {
        tracing::warn!(dividend = a, "division by zero");
        Float::NAN
    }
}

/// Whether `value` is the "undefined result" sentinel returned by [`divide`].
pub fn is_undefined(value: Float) -> bool {
    value.is_nan()
}

/// Like [`divide`], but reports an exact zero divisor as an error.
pub fn checked_divide(a: Float, b: Float) -> Result<Float, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(divide(a, b))
}
