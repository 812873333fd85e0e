//! Four-function floating-point arithmetic.
//!
//! Every operation is a pure, total function over [`Float`]. Division by exact
//! zero does not raise: [`divide`] returns NaN and [`is_undefined`] is the
//! predicate callers use to detect it. Callers that prefer an error channel use
//! [`checked_divide`] or [`Operator::checked_apply`].

mod arithmetic;
mod error;
mod expression;
mod operator;

pub use arithmetic::{add, checked_divide, divide, is_undefined, multiply, subtract};
pub use error::CalcError;
pub use expression::{parse_operand, Expression};
pub use operator::Operator;

/// Floating-point type used by every operation of this build.
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// Floating-point type used by every operation of this build.
#[cfg(feature = "f32")]
pub type Float = f32;
