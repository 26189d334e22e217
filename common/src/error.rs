//! Error type shared across the page core

use thiserror::Error;

/// Shared error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("invalid contact message: {0}")]
    Validation(String),
}

/// Result alias.
pub type Result<T> = std::result::Result<T, Error>;
