use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    // Serialization point for the username-uniqueness check and the save
    // that follows it. Without this, two concurrent creates with the same
    // fresh username could both pass the lookup and both succeed.
    create_lock: Mutex<()>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            create_lock: Mutex::new(()),
        }
    }

    /// Create a new user with password hashing.
    ///
    /// Fails with `AlreadyExists` if another live record holds the username.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<Uuid> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        // Hash before taking the lock; argon2 is deliberately slow.
        let password_hash = self.hash_password(&input.password)?;

        let _guard = self.create_lock.lock().await;

        if self
            .repository
            .get_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(UserError::AlreadyExists(input.username));
        }

        let user = User::new(input.username, input.email, password_hash, input.admin);
        let id = user.id;
        self.repository.save(user).await?;

        tracing::info!(user_id = %id, "Created user");
        Ok(id)
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Snapshot of all users
    pub async fn get_all_users(&self) -> UserResult<Vec<User>> {
        self.repository.get_all().await
    }

    /// Replace a user wholesale. The id must already exist; the password is
    /// always re-hashed. Username uniqueness is not re-checked here.
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<()> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        let password_hash = self.hash_password(&input.password)?;

        let user = User {
            id,
            username: input.username,
            email: input.email,
            password_hash,
            admin: input.admin,
        };
        self.repository.save(user).await?;

        tracing::info!(user_id = %id, "Updated user");
        Ok(())
    }

    /// Delete a user
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }

    /// Verify credentials for login.
    ///
    /// An unknown username and a wrong password fail with the same error so
    /// callers cannot enumerate usernames.
    pub async fn authenticate_user(&self, username: &str, password: &str) -> UserResult<User> {
        let user = self
            .repository
            .get_by_username(username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryUserRepository;

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(InMemoryUserRepository::new())
    }

    fn create_input(username: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "password".to_string(),
            admin: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let service = service();

        let id = service.create_user(create_input("alice")).await.unwrap();
        let user = service.get_user(id).await.unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(!user.admin);
        // Hashed, never the plaintext
        assert_ne!(user.password_hash, "password");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_email() {
        let service = service();

        let mut input = create_input("alice");
        input.email = "not-an-email".to_string();

        let result = service.create_user(input).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let service = service();

        service.create_user(create_input("alice")).await.unwrap();
        let result = service.create_user(create_input("alice")).await;

        assert!(matches!(result, Err(UserError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_concurrent_creates_same_username_one_winner() {
        let service = Arc::new(service());

        let first = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.create_user(create_input("race")).await }
        });
        let second = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.create_user(create_input("race")).await }
        });

        let (first, second) = (first.await.unwrap(), second.await.unwrap());
        assert!(first.is_ok() != second.is_ok(), "exactly one create must win");

        let users = service.get_all_users().await.unwrap();
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_update_round_trip_and_rehash() {
        let service = service();

        let id = service.create_user(create_input("alice")).await.unwrap();
        let before = service.get_user(id).await.unwrap();

        service
            .update_user(
                id,
                UpdateUser {
                    username: "alice2".to_string(),
                    email: "alice2@example.com".to_string(),
                    password: "new-password".to_string(),
                    admin: true,
                },
            )
            .await
            .unwrap();

        let after = service.get_user(id).await.unwrap();
        assert_eq!(after.id, id);
        assert_eq!(after.username, "alice2");
        assert_eq!(after.email, "alice2@example.com");
        assert!(after.admin);
        assert_ne!(after.password_hash, before.password_hash);

        // The new password authenticates, the old one does not
        assert!(service
            .authenticate_user("alice2", "new-password")
            .await
            .is_ok());
        assert!(service
            .authenticate_user("alice2", "password")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_operations_on_missing_id_fail_not_found() {
        let service = service();
        let id = Uuid::new_v4();

        assert!(matches!(
            service.get_user(id).await,
            Err(UserError::NotFound(_))
        ));
        assert!(matches!(
            service
                .update_user(
                    id,
                    UpdateUser {
                        username: "ghost".to_string(),
                        email: "ghost@example.com".to_string(),
                        password: "password".to_string(),
                        admin: false,
                    },
                )
                .await,
            Err(UserError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_user(id).await,
            Err(UserError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let service = service();

        let id = service.create_user(create_input("alice")).await.unwrap();
        service.delete_user(id).await.unwrap();

        assert!(matches!(
            service.get_user(id).await,
            Err(UserError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_authenticate_correct_password() {
        let service = service();

        let id = service.create_user(create_input("alice")).await.unwrap();
        let user = service.authenticate_user("alice", "password").await.unwrap();
        assert_eq!(user.id, id);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_fail_identically() {
        let service = service();
        service.create_user(create_input("alice")).await.unwrap();

        let wrong_password = service.authenticate_user("alice", "nope").await;
        let unknown_user = service.authenticate_user("nobody", "password").await;

        assert!(matches!(wrong_password, Err(UserError::InvalidCredentials)));
        assert!(matches!(unknown_user, Err(UserError::InvalidCredentials)));
    }
}
