use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use domain_users::{User, UserError, UserRepository, UserService};
use tonic::{Request, Status};

const AUTHORIZATION_HEADER: &str = "authorization";
const BASIC_SCHEME: &str = "Basic";

/// Credentials extracted from the `authorization` header, before verification.
#[derive(Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identity resolved for the current call; scoped to that call only.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub User);

/// Interceptor extracting `Basic` credentials from request metadata.
///
/// Runs before every handler. The header must be present exactly once, carry
/// the `Basic` scheme, and decode (base64) into `username:password` with the
/// split on the first colon only, so passwords may contain colons. Any
/// failure rejects the call with `Unauthenticated` and the handler never
/// runs.
#[derive(Clone, Debug, Default)]
pub struct BasicAuthInterceptor;

impl tonic::service::Interceptor for BasicAuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let credentials = extract_basic_credentials(&request)?;
        request.extensions_mut().insert(credentials);
        Ok(request)
    }
}

fn extract_basic_credentials<T>(request: &Request<T>) -> Result<BasicCredentials, Status> {
    let all = request.metadata().get_all(AUTHORIZATION_HEADER);
    let mut values = all.iter();
    let (Some(header), None) = (values.next(), values.next()) else {
        return Err(Status::unauthenticated("Missing authorization token"));
    };

    let header = header
        .to_str()
        .map_err(|_| Status::unauthenticated("Invalid authorization token"))?;

    let Some((scheme, token)) = header.split_once(' ') else {
        return Err(Status::unauthenticated("Invalid authorization token"));
    };
    if scheme != BASIC_SCHEME {
        return Err(Status::unauthenticated("Invalid authorization scheme"));
    }

    let decoded = BASE64
        .decode(token)
        .map_err(|_| Status::unauthenticated("Invalid authorization token"))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| Status::unauthenticated("Invalid authorization token"))?;

    let Some((username, password)) = decoded.split_once(':') else {
        return Err(Status::unauthenticated("Invalid authorization token"));
    };

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Verifies extracted credentials against the store and attaches the
/// resolved identity to the request for downstream stages.
pub struct Authenticator<R: UserRepository> {
    users: Arc<UserService<R>>,
}

impl<R: UserRepository> Authenticator<R> {
    pub fn new(users: Arc<UserService<R>>) -> Self {
        Self { users }
    }

    /// Resolve the credentials left by [`BasicAuthInterceptor`].
    ///
    /// Unknown usernames and wrong passwords surface identically as
    /// `Unauthenticated`; a missing credentials extension means the
    /// interceptor never ran, which is a server wiring error.
    pub async fn authenticate<T>(&self, request: &mut Request<T>) -> Result<(), Status> {
        let credentials = request
            .extensions()
            .get::<BasicCredentials>()
            .cloned()
            .ok_or_else(|| Status::internal("Credentials were not extracted"))?;

        let user = self
            .users
            .authenticate_user(&credentials.username, &credentials.password)
            .await
            .map_err(|err| match err {
                UserError::InvalidCredentials => Status::unauthenticated("Invalid credentials"),
                other => Status::from(other),
            })?;

        request.extensions_mut().insert(AuthenticatedUser(user));
        Ok(())
    }
}

/// The identity attached by [`Authenticator::authenticate`], or an internal
/// error if authentication did not run on this call.
pub fn authenticated_user<T>(request: &Request<T>) -> Result<&User, Status> {
    request
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|user| &user.0)
        .ok_or_else(|| Status::internal("Failed to get authenticated user"))
}

/// Authorization gate for privileged operations.
pub fn require_admin<T>(request: &Request<T>) -> Result<(), Status> {
    let user = authenticated_user(request)?;
    if !user.admin {
        return Err(Status::permission_denied("Admin access required"));
    }
    Ok(())
}
