//! Application use cases.
//!
//! Every use case returns `AppResult<Either<DomainError, Response>>`: the
//! outer `Result` carries capability faults, the `Either` carries the
//! business outcome.

mod authenticate_user;
mod create_account;

pub use authenticate_user::{
    AuthenticateUserOutcome, AuthenticateUserRequest, AuthenticateUserResponse,
    AuthenticateUserUseCase,
};
#[cfg(test)]
pub(crate) use authenticate_user::DUMMY_PASSWORD_HASH;
pub use create_account::{
    CreateAccountOutcome, CreateAccountRequest, CreateAccountResponse, CreateAccountUseCase,
};
