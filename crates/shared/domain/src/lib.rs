//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! identities, the entity base, the `Either` result discipline, the `Address`
//! value object and the `User`/`Hotel` entities.

pub mod address;
pub mod constants;
pub mod either;
pub mod entity;
pub mod error;
pub mod hotel;
pub mod identity;
pub mod user;

pub use address::{Address, AddressProps};
pub use constants::*;
pub use either::Either;
pub use entity::{Entity, Identifiable, Timestamped, Timestamps};
pub use error::{DomainError, InvalidAddressError};
pub use hotel::{CreateHotel, Hotel};
pub use identity::UniqueEntityId;
pub use user::{CreateUser, User};
