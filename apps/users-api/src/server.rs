use std::sync::Arc;

use core_config::server::{AdminBootstrap, GrpcConfig};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use domain_users::{CreateUser, InMemoryUserRepository, UserRepository, UserService};
use eyre::{Result, WrapErr};
use rpc::users::v1::users_service_server::UsersServiceServer;
use tonic::transport::Server;

use crate::auth::BasicAuthInterceptor;
use crate::service::UsersServiceImpl;

/// Start the gRPC server and block until shutdown.
pub async fn run() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let config = GrpcConfig::from_env().wrap_err("Failed to load gRPC configuration")?;
    let addr = config.socket_addr().wrap_err("Invalid listen address")?;

    let users = Arc::new(UserService::new(InMemoryUserRepository::new()));
    bootstrap_admin(&users).await?;

    let service = UsersServiceImpl::new(Arc::clone(&users));

    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<UsersServiceServer<UsersServiceImpl<InMemoryUserRepository>>>()
        .await;

    tracing::info!(address = %addr, environment = ?environment, "Starting users gRPC server");

    Server::builder()
        .add_service(health_service)
        .add_service(UsersServiceServer::with_interceptor(
            service,
            BasicAuthInterceptor,
        ))
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .wrap_err("gRPC server failed")?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Provision the initial administrator directly through the service layer.
///
/// Without it the store starts empty and every privileged operation is
/// unreachable, so a missing bootstrap is loud in the logs.
async fn bootstrap_admin<R: UserRepository>(users: &UserService<R>) -> Result<()> {
    match AdminBootstrap::from_env().wrap_err("Failed to load admin bootstrap configuration")? {
        Some(admin) => {
            let id = users
                .create_user(CreateUser {
                    username: admin.username.clone(),
                    email: admin.email,
                    password: admin.password,
                    admin: true,
                })
                .await
                .wrap_err("Failed to create bootstrap admin")?;
            tracing::info!(user_id = %id, username = %admin.username, "Provisioned bootstrap admin");
        }
        None => {
            tracing::warn!(
                "No bootstrap admin configured; privileged operations will be unreachable"
            );
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
    } else {
        tracing::info!("Shutdown signal received");
    }
}
