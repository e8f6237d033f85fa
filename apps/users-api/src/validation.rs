use tonic::Status;
use uuid::Uuid;
use validator::ValidateEmail;

use rpc::users::v1::{CreateUserRequest, DeleteUserRequest, GetUserByIdRequest, UpdateUserRequest};

/// Structural validation of incoming requests: identifiers must parse as
/// UUIDs and e-mails must satisfy the e-mail grammar. Runs before the
/// authorization gate and before any business logic.
pub trait ValidateRequest {
    fn validate(&self) -> Result<(), Status>;
}

impl ValidateRequest for CreateUserRequest {
    fn validate(&self) -> Result<(), Status> {
        if !self.email.validate_email() {
            return Err(Status::invalid_argument("Invalid email"));
        }
        Ok(())
    }
}

impl ValidateRequest for GetUserByIdRequest {
    fn validate(&self) -> Result<(), Status> {
        parse_id(&self.id).map(|_| ())
    }
}

impl ValidateRequest for UpdateUserRequest {
    fn validate(&self) -> Result<(), Status> {
        parse_id(&self.id)?;
        if !self.email.validate_email() {
            return Err(Status::invalid_argument("Invalid email"));
        }
        Ok(())
    }
}

impl ValidateRequest for DeleteUserRequest {
    fn validate(&self) -> Result<(), Status> {
        parse_id(&self.id).map(|_| ())
    }
}

pub fn parse_id(id: &str) -> Result<Uuid, Status> {
    Uuid::parse_str(id).map_err(|_| Status::invalid_argument("Invalid user id"))
}
