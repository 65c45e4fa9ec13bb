//! Test doubles and factories shared by the integration suites.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};

use account_service_lib::capabilities::{Encrypter, HashComparer, HashGenerator, TokenClaims};
use common::AppResult;
use domain::{CreateUser, UniqueEntityId, User};

/// Deterministic, reversible stand-in for a real hasher
pub struct FakeHasher;

#[async_trait]
impl HashGenerator for FakeHasher {
    async fn hash(&self, plain: &str) -> AppResult<String> {
        Ok(format!("{}-hashed", plain))
    }
}

#[async_trait]
impl HashComparer for FakeHasher {
    async fn compare(&self, plain: &str, hash: &str) -> AppResult<bool> {
        Ok(format!("{}-hashed", plain) == hash)
    }
}

/// Renders the claims as JSON instead of signing them
pub struct FakeEncrypter;

#[async_trait]
impl Encrypter for FakeEncrypter {
    async fn encrypt(&self, claims: &TokenClaims) -> AppResult<String> {
        Ok(serde_json::to_string(claims).expect("claims serialize"))
    }
}

/// Field overrides for [`make_user`]
#[derive(Default)]
pub struct UserOverrides {
    pub email: Option<String>,
    pub password: Option<String>,
    pub tax_id: Option<String>,
    pub name: Option<String>,
}

/// Build a valid user with unique email and tax id unless overridden
pub fn make_user(overrides: UserOverrides, id: Option<UniqueEntityId>) -> User {
    let seed = UniqueEntityId::generate();

    User::create(
        CreateUser {
            tax_id: overrides.tax_id.unwrap_or_else(|| seed.to_string()),
            name: overrides.name.unwrap_or_else(|| "Maria Silva".to_string()),
            email: overrides
                .email
                .unwrap_or_else(|| format!("{}@example.com", seed)),
            password: overrides.password.unwrap_or_else(|| "secret-hashed".to_string()),
            birth_date: Utc::now() - Duration::days(365 * 30),
            created_at: None,
            updated_at: None,
        },
        id,
    )
}
