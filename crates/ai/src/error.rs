//! AI assistant error types.

use thiserror::Error;

/// Errors produced by the LLM-backed resolution layer.
///
/// Note that fallback resolution never surfaces `Provider`/`Timeout` to its
/// caller; those degrade to a not-found outcome inside the resolver. They
/// exist so the model client boundary can report what actually happened.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The model call exceeded its time budget.
    #[error("Model call timed out after {0}ms")]
    Timeout(u64),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
