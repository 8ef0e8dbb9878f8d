//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, graph assembly failures, and lookups of unknown or unregistered modules.
//!
//! An unconnected source slot is not represented here: evaluating such a module panics.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("module graph compile error: {0}")]
    Compile(String),

    #[error("unknown module '{id}'")]
    UnknownModule { id: String },

    #[error("missing registered module '{id}'")]
    MissingModule { id: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
