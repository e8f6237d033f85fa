use std::sync::Arc;

use domain_users::{CreateUser, UpdateUser, UserRepository, UserService};
use rpc::users::v1::users_service_server::UsersService;
use rpc::users::v1::{
    CreateUserRequest, CreateUserResponse, DeleteUserRequest, DeleteUserResponse,
    GetAllUsersRequest, GetAllUsersResponse, GetUserByIdRequest, GetUserByIdResponse,
    UpdateUserRequest, UpdateUserResponse,
};
use tonic::{Request, Response, Status};

use crate::auth::{require_admin, Authenticator};
use crate::conversions::user_to_proto;
use crate::validation::{parse_id, ValidateRequest};

/// gRPC handlers for the users service.
///
/// Every handler authenticates first, then validates the request, then (for
/// privileged operations) checks the admin flag, and only then touches the
/// store. Listing users is open to any authenticated caller; the other four
/// operations are admin-only.
pub struct UsersServiceImpl<R: UserRepository> {
    users: Arc<UserService<R>>,
    authenticator: Authenticator<R>,
}

impl<R: UserRepository> UsersServiceImpl<R> {
    pub fn new(users: Arc<UserService<R>>) -> Self {
        Self {
            authenticator: Authenticator::new(Arc::clone(&users)),
            users,
        }
    }
}

#[tonic::async_trait]
impl<R: UserRepository + 'static> UsersService for UsersServiceImpl<R> {
    async fn create_user(
        &self,
        mut request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        self.authenticator.authenticate(&mut request).await?;
        request.get_ref().validate()?;
        require_admin(&request)?;

        let input = request.into_inner();
        let id = self
            .users
            .create_user(CreateUser {
                username: input.username,
                email: input.email,
                password: input.password,
                admin: input.admin,
            })
            .await?;

        Ok(Response::new(CreateUserResponse { id: id.to_string() }))
    }

    async fn get_all_users(
        &self,
        mut request: Request<GetAllUsersRequest>,
    ) -> Result<Response<GetAllUsersResponse>, Status> {
        self.authenticator.authenticate(&mut request).await?;

        let users = self.users.get_all_users().await?;
        Ok(Response::new(GetAllUsersResponse {
            users: users.iter().map(user_to_proto).collect(),
        }))
    }

    async fn get_user_by_id(
        &self,
        mut request: Request<GetUserByIdRequest>,
    ) -> Result<Response<GetUserByIdResponse>, Status> {
        self.authenticator.authenticate(&mut request).await?;
        request.get_ref().validate()?;
        require_admin(&request)?;

        let id = parse_id(&request.get_ref().id)?;
        let user = self.users.get_user(id).await?;

        Ok(Response::new(GetUserByIdResponse {
            user: Some(user_to_proto(&user)),
        }))
    }

    async fn update_user(
        &self,
        mut request: Request<UpdateUserRequest>,
    ) -> Result<Response<UpdateUserResponse>, Status> {
        self.authenticator.authenticate(&mut request).await?;
        request.get_ref().validate()?;
        require_admin(&request)?;

        let input = request.into_inner();
        let id = parse_id(&input.id)?;
        self.users
            .update_user(
                id,
                UpdateUser {
                    username: input.username,
                    email: input.email,
                    password: input.password,
                    admin: input.admin,
                },
            )
            .await?;

        Ok(Response::new(UpdateUserResponse {}))
    }

    async fn delete_user(
        &self,
        mut request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        self.authenticator.authenticate(&mut request).await?;
        request.get_ref().validate()?;
        require_admin(&request)?;

        let id = parse_id(&request.get_ref().id)?;
        self.users.delete_user(id).await?;

        Ok(Response::new(DeleteUserResponse {}))
    }
}
