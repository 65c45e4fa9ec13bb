//! Capabilities the use cases depend on but do not implement.

mod cryptography;

pub use cryptography::{Encrypter, HashComparer, HashGenerator, TokenClaims};

#[cfg(any(test, feature = "test-utils"))]
pub use cryptography::{MockEncrypter, MockHashComparer, MockHashGenerator};
