//! Account registration use case.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use common::AppResult;
use domain::{CreateUser, DomainError, Either, User, MIN_NAME_LENGTH};

use crate::capabilities::HashGenerator;
use crate::repository::UserRepository;

/// Registration payload
#[derive(Debug, Clone)]
pub struct CreateAccountRequest {
    pub email: String,
    pub password: String,
    pub tax_id: String,
    pub name: String,
    pub birth_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountResponse {
    pub user_id: String,
}

pub type CreateAccountOutcome = Either<DomainError, CreateAccountResponse>;

/// Registers a new user account.
///
/// Rejections come back as `Left`; only capability failures end up in `Err`.
pub struct CreateAccountUseCase {
    user_repository: Arc<dyn UserRepository>,
    hash_generator: Arc<dyn HashGenerator>,
}

impl CreateAccountUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        hash_generator: Arc<dyn HashGenerator>,
    ) -> Self {
        Self {
            user_repository,
            hash_generator,
        }
    }

    pub async fn execute(&self, request: CreateAccountRequest) -> AppResult<CreateAccountOutcome> {
        let email = request.email.trim();
        let tax_id = request.tax_id.trim();
        let name = request.name.trim();

        if self.user_repository.find_by_email(email).await?.is_some() {
            warn!(email = %email, "Registration rejected: email already in use");
            return Ok(Either::left(DomainError::UserAlreadyExists));
        }

        if self.user_repository.find_by_tax_id(tax_id).await?.is_some() {
            warn!("Registration rejected: tax id already in use");
            return Ok(Either::left(DomainError::TaxIdAlreadyExists));
        }

        if name.chars().count() < MIN_NAME_LENGTH {
            return Ok(Either::left(DomainError::NameTooShort));
        }

        if request.birth_date >= Utc::now() {
            return Ok(Either::left(DomainError::BirthDateInFuture));
        }

        let password = self.hash_generator.hash(&request.password).await?;

        let user = User::create(
            CreateUser {
                tax_id: tax_id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                password,
                birth_date: request.birth_date,
                created_at: None,
                updated_at: None,
            },
            None,
        );
        let user_id = user.id().to_string();

        self.user_repository.save(user).await?;
        info!(user_id = %user_id, "Account created");

        Ok(Either::right(CreateAccountResponse { user_id }))
    }
}
