//! Data models for Keycloak admin API payloads.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod auth;
pub mod authz;
pub mod clients;
pub mod common;
pub mod roles;
pub mod users;

pub use auth::TokenResponse;
pub use authz::{
    AuthzPermission, AuthzPolicy, AuthzResource, DEFAULT_PERMISSION_NAME, DEFAULT_POLICY_NAME,
    DEFAULT_RESOURCE_NAME,
};
pub use clients::ClientRepresentation;
pub use common::{KeycloakErrorBody, NamedEntry};
pub use roles::Role;
pub use users::User;
