//! Keycloak admin REST API client.
//!
//! This crate provides a small, type-safe client for the parts of the Keycloak
//! admin API used by the provisioning tools: admin token acquisition, user and
//! client lookup, client role mappings, and authorization-services resources,
//! policies, and permissions.

mod admin;
mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use admin::AdminApi;
pub use auth::{AdminCredentials, SessionManager};
pub use client::KeycloakClient;
pub use client::builder::KeycloakClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    AuthzPermission, AuthzPolicy, AuthzResource, ClientRepresentation, NamedEntry, Role,
    TokenResponse, User,
};
