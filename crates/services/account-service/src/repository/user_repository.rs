//! User repository capability.

use async_trait::async_trait;

use common::AppResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations must offer read-your-writes consistency: a user passed to
/// `save` is visible to the next `find_*` call, otherwise uniqueness checks
/// in the use cases can be bypassed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find user by tax identifier
    async fn find_by_tax_id(&self, tax_id: &str) -> AppResult<Option<User>>;

    /// Insert the user, or replace the stored user with the same id
    async fn save(&self, user: User) -> AppResult<()>;
}
