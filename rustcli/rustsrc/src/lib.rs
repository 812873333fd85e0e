//! Terminal front-end for the `calculator` core.

pub mod error;
pub mod logging;
pub mod session;

pub use error::CliError;
