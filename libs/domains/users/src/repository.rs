use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or overwrite a user by id
    async fn save(&self, user: User) -> UserResult<()>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by username (case-sensitive exact match, first match wins)
    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// Snapshot of all live users, unspecified order
    async fn get_all(&self) -> UserResult<Vec<User>>;

    /// Delete a user by ID; returns false when absent
    async fn delete(&self, id: Uuid) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository.
///
/// Backed by a sharded concurrent map, so all operations are safe under
/// arbitrary concurrent callers without external locking. Scans
/// (`get_by_username`, `get_all`) observe a weakly consistent snapshot and
/// may interleave with concurrent writers.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: DashMap<Uuid, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> UserResult<()> {
        self.users.insert(user.id, user);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.clone()))
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let user = self
            .users
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.clone());
        Ok(user)
    }

    async fn get_all(&self) -> UserResult<Vec<User>> {
        Ok(self.users.iter().map(|entry| entry.clone()).collect())
    }

    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        Ok(self.users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        User::new(
            username.to_string(),
            format!("{username}@example.com"),
            "hashed_password".to_string(),
            false,
        )
    }

    #[tokio::test]
    async fn test_save_and_get_by_id() {
        let repo = InMemoryUserRepository::new();

        let created = user("test");
        repo.save(created.clone()).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().username, "test");
    }

    #[tokio::test]
    async fn test_save_overwrites_by_id() {
        let repo = InMemoryUserRepository::new();

        let mut record = user("before");
        repo.save(record.clone()).await.unwrap();

        record.username = "after".to_string();
        repo.save(record.clone()).await.unwrap();

        let fetched = repo.get_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(fetched.username, "after");
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_username_is_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("Alice")).await.unwrap();

        assert!(repo.get_by_username("Alice").await.unwrap().is_some());
        assert!(repo.get_by_username("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_absent() {
        let repo = InMemoryUserRepository::new();
        let fetched = repo.get_by_id(Uuid::new_v4()).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_get_all_snapshot() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("a")).await.unwrap();
        repo.save(user("b")).await.unwrap();
        repo.save(user("c")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let record = user("gone");
        repo.save(record.clone()).await.unwrap();

        assert!(repo.delete(record.id).await.unwrap());
        assert!(!repo.delete(record.id).await.unwrap());
        assert!(repo.get_by_id(record.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_writers_and_readers() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryUserRepository::new());
        let mut handles = Vec::new();

        for i in 0..16 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let record = user(&format!("user{i}"));
                repo.save(record.clone()).await.unwrap();
                let _ = repo.get_all().await.unwrap();
                repo.get_by_id(record.id).await.unwrap().unwrap()
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.get_all().await.unwrap().len(), 16);
    }
}
