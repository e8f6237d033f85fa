use crate::{env_or_default, env_required, ConfigError, FromEnv};
use std::env;
use std::net::SocketAddr;

/// Listen configuration for the gRPC server
#[derive(Clone, Debug)]
pub struct GrpcConfig {
    pub host: String,
    pub port: u16,
}

impl GrpcConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.address()
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "GRPC_HOST/GRPC_PORT".to_string(),
                details: format!("{}", e),
            })
    }
}

impl FromEnv for GrpcConfig {
    /// Reads from environment variables with sensible defaults:
    /// - GRPC_HOST: defaults to [::1]
    /// - GRPC_PORT: defaults to 50051
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("GRPC_HOST", "[::1]");
        let port = env_or_default("GRPC_PORT", "50051")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "GRPC_PORT".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self { host, port })
    }
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            host: "[::1]".to_string(),
            port: 50051,
        }
    }
}

/// Initial administrator account, provisioned once at startup by calling the
/// user service directly (bypassing the transport and auth chain).
///
/// Either all three variables are set, or none of them.
#[derive(Clone)]
pub struct AdminBootstrap {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AdminBootstrap {
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let unset = ["ADMIN_USERNAME", "ADMIN_EMAIL", "ADMIN_PASSWORD"]
            .iter()
            .all(|key| env::var(key).is_err());
        if unset {
            return Ok(None);
        }

        Ok(Some(Self {
            username: env_required("ADMIN_USERNAME")?,
            email: env_required("ADMIN_EMAIL")?,
            password: env_required("ADMIN_PASSWORD")?,
        }))
    }
}

// The password must never end up in logs through a stray `{:?}`.
impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
