use uuid::Uuid;
use validator::Validate;

/// User entity
#[derive(Clone)]
pub struct User {
    /// Unique identifier, assigned once at creation
    pub id: Uuid,
    /// Username (unique across live records, case-sensitive)
    pub username: String,
    /// E-mail address
    pub email: String,
    /// Argon2 password hash in PHC string format (never the plaintext)
    pub password_hash: String,
    /// Privilege flag for admin-only operations
    pub admin: bool,
}

impl User {
    /// Create a new user (password must already be hashed by the service layer)
    pub fn new(username: String, email: String, password_hash: String, admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            admin,
        }
    }
}

// The hash is opaque secret material; keep it out of `{:?}` output.
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("admin", &self.admin)
            .finish()
    }
}

/// DTO for creating a new user
#[derive(Clone, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
    pub admin: bool,
}

/// DTO for updating an existing user. Full-replace semantics: every field is
/// written and the password is always re-hashed.
#[derive(Clone, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
    pub admin: bool,
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("admin", &self.admin)
            .finish()
    }
}

impl std::fmt::Debug for UpdateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("admin", &self.admin)
            .finish()
    }
}
