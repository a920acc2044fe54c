use thiserror::Error;

/// Unified error type for Floe crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid operator key: {0}")]
    InvalidKey(String),
    #[error("Plan error: {0}")]
    Plan(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn plan(msg: impl Into<String>) -> Self {
        Error::Plan(msg.into())
    }
}
