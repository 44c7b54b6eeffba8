//! Error types for fixture generation

use thiserror::Error;

/// Errors raised while writing or reading fixture files
///
/// Generation itself cannot fail; every variant comes from touching the
/// filesystem or the JSON codec.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;
