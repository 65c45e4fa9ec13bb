//! Infrastructure fault type.
//!
//! Business outcomes never travel through [`AppError`]; they are returned as
//! the left side of `domain::Either`. `AppError` covers everything a
//! capability can fail with (storage, hashing, token signing, configuration),
//! and use cases propagate it untouched with `?`.

use thiserror::Error;

/// Unexpected failures raised by capabilities and wiring.
#[derive(Error, Debug)]
pub enum AppError {
    /// Repository backend failed
    #[error("Repository error: {0}")]
    Repository(String),

    /// Password hashing backend failed
    #[error("Hashing error: {0}")]
    Hashing(String),

    #[cfg(feature = "jwt")]
    #[error("Token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs and callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Repository(_) => "REPOSITORY_ERROR",
            AppError::Hashing(_) => "HASHING_ERROR",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "TOKEN_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(msg) => msg.clone(),
            AppError::Repository(msg) => {
                tracing::error!("Repository error: {}", msg);
                "A storage error occurred".to_string()
            }
            AppError::Hashing(msg) => {
                tracing::error!("Hashing error: {}", msg);
                "An internal error occurred".to_string()
            }
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn repository(msg: impl Into<String>) -> Self {
        AppError::Repository(msg.into())
    }

    pub fn hashing(msg: impl Into<String>) -> Self {
        AppError::Hashing(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
