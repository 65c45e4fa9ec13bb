//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, storage, crypto).

use thiserror::Error;

/// Expected business outcomes carried on the left side of an [`Either`].
///
/// None of these are faults: a use case that produces one has run to
/// completion and is reporting why the request was refused.
///
/// [`Either`]: crate::Either
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Another account already uses the requested email
    #[error("User already exists with this email.")]
    UserAlreadyExists,

    /// Another account already uses the requested tax identifier
    #[error("Tax ID already exists.")]
    TaxIdAlreadyExists,

    /// Name is shorter than [`MIN_NAME_LENGTH`](crate::MIN_NAME_LENGTH) once trimmed
    #[error("Name should be at least 3 characters long.")]
    NameTooShort,

    /// Birth date is not strictly in the past
    #[error("Birth date cannot be in the future.")]
    BirthDateInFuture,

    /// Unknown email or wrong password. The two causes are never told apart.
    #[error("Credentials are not valid.")]
    WrongCredentials,
}

/// Raised by [`Address::create`](crate::Address::create) when the props
/// cannot form a valid address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvalidAddressError(String);

impl InvalidAddressError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// Human-readable reason for the rejection
    pub fn reason(&self) -> &str {
        &self.0
    }
}
