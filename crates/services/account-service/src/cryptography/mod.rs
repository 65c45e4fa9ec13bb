//! Concrete cryptography adapters.

mod argon2_hasher;
mod jwt_encrypter;

pub use argon2_hasher::Argon2Hasher;
pub use jwt_encrypter::{Claims, JwtEncrypter};
