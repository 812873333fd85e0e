use calculator::CalcError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FFIError {
    #[error("Expression pointer is null")]
    NullPointer,

    #[error("Expression is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Calc(#[from] CalcError),
}
