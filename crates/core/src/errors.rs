//! Core error types for the siteguide domain layer.
//!
//! A lexicon that fails to load or validate is fatal: the service must not
//! answer queries against an empty or corrupt lexicon.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the domain layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read a lexicon source.
    #[error("Failed to load lexicon: {0}")]
    LexiconIO(String),

    /// A lexicon source parsed but violated an invariant.
    #[error("Invalid lexicon data: {0}")]
    InvalidLexicon(String),

    /// JSON (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
