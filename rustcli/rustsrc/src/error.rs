use std::io;

use calculator::CalcError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Input ended before the {0} was entered")]
    UnexpectedEof(&'static str),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
