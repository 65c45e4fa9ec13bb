//! Argon2 password hashing adapter.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;

use common::{AppError, AppResult};

use crate::capabilities::{HashComparer, HashGenerator};

/// Hashes passwords with Argon2id default parameters and a random salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[async_trait]
impl HashGenerator for Argon2Hasher {
    async fn hash(&self, plain: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }
}

#[async_trait]
impl HashComparer for Argon2Hasher {
    /// A stored hash that does not parse never matches.
    async fn compare(&self, plain: &str, hash: &str) -> AppResult<bool> {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
                return Ok(false);
            }
        };

        Ok(Self::argon2()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok())
    }
}
