//! Process-local user store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::User;

use super::UserRepository;

/// [`UserRepository`] backed by a vector behind an async lock.
///
/// Reads hand out clones, so callers never alias stored users.
#[derive(Default)]
pub struct InMemoryUserRepository {
    items: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `users`
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            items: RwLock::new(users.into_iter().collect()),
        }
    }

    /// Snapshot of every stored user, in insertion order
    pub async fn items(&self) -> Vec<User> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    async fn find_by<F>(&self, predicate: F) -> Option<User>
    where
        F: Fn(&User) -> bool,
    {
        self.items
            .read()
            .await
            .iter()
            .find(|user| predicate(user))
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.find_by(|user| user.email() == email).await)
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> AppResult<Option<User>> {
        Ok(self.find_by(|user| user.tax_id() == tax_id).await)
    }

    async fn save(&self, user: User) -> AppResult<()> {
        let mut items = self.items.write().await;

        match items.iter_mut().find(|stored| stored.id() == user.id()) {
            Some(stored) => *stored = user,
            None => items.push(user),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use domain::CreateUser;

    fn create_test_user(email: &str, tax_id: &str) -> User {
        User::create(
            CreateUser {
                tax_id: tax_id.to_string(),
                name: "Test User".to_string(),
                email: email.to_string(),
                password: "hashed".to_string(),
                birth_date: Utc::now() - Duration::days(10_000),
                created_at: None,
                updated_at: None,
            },
            None,
        )
    }

    #[tokio::test]
    async fn test_save_then_find() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("a@x.com", "T1");

        repo.save(user.clone()).await.unwrap();

        assert_eq!(repo.find_by_email("a@x.com").await.unwrap(), Some(user.clone()));
        assert_eq!(repo.find_by_tax_id("T1").await.unwrap(), Some(user));
        assert_eq!(repo.find_by_email("b@x.com").await.unwrap(), None);
        assert_eq!(repo.find_by_tax_id("T2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_replaces_same_identity() {
        let mut user = create_test_user("a@x.com", "T1");
        let repo = InMemoryUserRepository::with_users([user.clone()]);

        user.set_email("new@x.com".to_string());
        repo.save(user).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert!(repo.find_by_email("a@x.com").await.unwrap().is_none());
        assert!(repo.find_by_email("new@x.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_distinct_users_accumulate() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.is_empty().await);

        repo.save(create_test_user("a@x.com", "T1")).await.unwrap();
        repo.save(create_test_user("b@x.com", "T2")).await.unwrap();

        let emails: Vec<String> = repo
            .items()
            .await
            .iter()
            .map(|u| u.email().to_string())
            .collect();
        assert_eq!(emails, ["a@x.com", "b@x.com"]);
    }
}
