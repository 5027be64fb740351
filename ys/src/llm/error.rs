//! LLM error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0} environment variable is not set.")]
    MissingApiKey(String),

    #[error("Error communicating with OpenRouter API: rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("Error communicating with OpenRouter API: HTTP {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Error communicating with OpenRouter API: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidResponse(String),

    #[error("Invalid JSON from OpenRouter API: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// True when the message already names the failing service
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LlmError::Network(_) | LlmError::ApiError { .. } | LlmError::RateLimited { .. }
        )
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, LlmError::RateLimited { .. })
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::RateLimited { .. } => true,
            LlmError::ApiError { status, .. } => *status == 408 || *status >= 500,
            LlmError::Network(_) => true,
            LlmError::MissingApiKey(_) => false,
            LlmError::InvalidResponse(_) => false,
            LlmError::Json(_) => false,
        }
    }
}
