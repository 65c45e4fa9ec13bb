//! Credential check and access token issuance.

use std::sync::Arc;

use tracing::{info, warn};

use common::AppResult;
use domain::{DomainError, Either, User};

use crate::capabilities::{Encrypter, HashComparer, TokenClaims};
use crate::repository::UserRepository;

#[derive(Debug, Clone)]
pub struct AuthenticateUserRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticateUserResponse {
    pub access_token: String,
}

pub type AuthenticateUserOutcome = Either<DomainError, AuthenticateUserResponse>;

/// Well-formed Argon2id hash that matches no password. Unknown emails are
/// checked against it so both failure paths pay for a full verification.
pub(crate) const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$YWNjb3VudC1zdmMtc2FsdA$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

/// Exchanges email and password for a signed access token.
///
/// An unknown email and a wrong password both yield
/// `Left(DomainError::WrongCredentials)`, so the outcome never reveals
/// whether an account exists.
pub struct AuthenticateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    hash_comparer: Arc<dyn HashComparer>,
    encrypter: Arc<dyn Encrypter>,
}

impl AuthenticateUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        hash_comparer: Arc<dyn HashComparer>,
        encrypter: Arc<dyn Encrypter>,
    ) -> Self {
        Self {
            user_repository,
            hash_comparer,
            encrypter,
        }
    }

    pub async fn execute(
        &self,
        request: AuthenticateUserRequest,
    ) -> AppResult<AuthenticateUserOutcome> {
        let user = self.user_repository.find_by_email(&request.email).await?;

        let stored_hash = user.as_ref().map_or(DUMMY_PASSWORD_HASH, User::password);
        let password_valid = self
            .hash_comparer
            .compare(&request.password, stored_hash)
            .await?;

        let Some(user) = user.filter(|_| password_valid) else {
            warn!("Authentication failed");
            return Ok(Either::left(DomainError::WrongCredentials));
        };

        let access_token = self
            .encrypter
            .encrypt(&TokenClaims {
                sub: user.id().to_string(),
            })
            .await?;

        info!(user_id = %user.id(), "User authenticated");
        Ok(Either::right(AuthenticateUserResponse { access_token }))
    }
}
