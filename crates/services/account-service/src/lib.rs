//! Account Service Library
//!
//! This crate provides account registration and authentication use cases,
//! the capability traits they depend on, and default adapters for those
//! capabilities.

pub mod capabilities;
pub mod config;
pub mod cryptography;
pub mod repository;
pub mod use_cases;

use std::sync::Arc;

use tracing::info;

use crate::config::AccountServiceConfig;
use crate::cryptography::{Argon2Hasher, JwtEncrypter};
use crate::repository::InMemoryUserRepository;
use crate::use_cases::{AuthenticateUserUseCase, CreateAccountUseCase};

/// Use cases wired to the default adapters: in-memory storage, Argon2
/// hashing and JWT tokens.
pub struct AccountModule {
    users: Arc<InMemoryUserRepository>,
    create_account: CreateAccountUseCase,
    authenticate_user: AuthenticateUserUseCase,
}

impl AccountModule {
    pub fn new(config: &AccountServiceConfig) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(Argon2Hasher::new());
        let encrypter = Arc::new(JwtEncrypter::new(config.jwt.clone()));

        let create_account = CreateAccountUseCase::new(users.clone(), hasher.clone());
        let authenticate_user = AuthenticateUserUseCase::new(users.clone(), hasher, encrypter);

        info!(service = %config.telemetry.service_name, "Account module ready");

        Self {
            users,
            create_account,
            authenticate_user,
        }
    }

    pub fn create_account(&self) -> &CreateAccountUseCase {
        &self.create_account
    }

    pub fn authenticate_user(&self) -> &AuthenticateUserUseCase {
        &self.authenticate_user
    }

    /// The backing store, for inspection and seeding
    pub fn users(&self) -> &InMemoryUserRepository {
        &self.users
    }
}
