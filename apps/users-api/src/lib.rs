//! gRPC user management service.
//!
//! Request-processing pipeline, in call order:
//!
//! 1. [`auth::BasicAuthInterceptor`] — extracts `Basic` credentials from the
//!    `authorization` metadata entry; malformed or missing credentials reject
//!    the call before any handler runs.
//! 2. [`auth::Authenticator`] — verifies the credentials against the store
//!    and attaches the resolved identity to the request.
//! 3. [`validation::ValidateRequest`] — structural request validation.
//! 4. [`auth::require_admin`] — authorization gate for privileged operations.
//! 5. [`service::UsersServiceImpl`] — the business handlers.
//!
//! Domain errors are translated to transport statuses at the
//! `domain_users::UserError` → `tonic::Status` boundary; internal causes are
//! logged server-side and never leak to the caller.

pub mod auth;
pub mod conversions;
pub mod server;
pub mod service;
pub mod validation;
