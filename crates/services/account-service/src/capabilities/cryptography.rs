//! Password hashing and token signing capabilities.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Claims handed to an [`Encrypter`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the authenticated user's id
    pub sub: String,
}

/// One-way password hashing.
///
/// Hashing the same input twice may yield different outputs (salting).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HashGenerator: Send + Sync {
    async fn hash(&self, plain: &str) -> AppResult<String>;
}

/// Checks a plain-text password against a stored hash.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HashComparer: Send + Sync {
    async fn compare(&self, plain: &str, hash: &str) -> AppResult<bool>;
}

/// Issues signed access tokens.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, claims: &TokenClaims) -> AppResult<String>;
}
