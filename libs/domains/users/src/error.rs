use thiserror::Error;
use tonic::Status;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(Uuid),

    #[error("User with username '{0}' already exists")]
    AlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Translation to the transport status space.
///
/// Classified errors pass through with their own code; anything internal is
/// logged server-side and surfaced as a generic `Internal` status so no
/// detail leaks to the caller.
impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        match &err {
            UserError::NotFound(id) => Status::not_found(format!("User {} not found", id)),
            UserError::AlreadyExists(username) => {
                Status::already_exists(format!("User with username '{}' already exists", username))
            }
            UserError::InvalidCredentials => Status::unauthenticated("Invalid credentials"),
            UserError::Validation(msg) => Status::invalid_argument(msg.clone()),
            UserError::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                Status::internal("Internal error")
            }
            UserError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                Status::internal("Internal error")
            }
        }
    }
}
