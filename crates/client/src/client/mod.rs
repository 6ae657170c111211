//! Keycloak admin REST client.
//!
//! [`KeycloakClient`] owns the HTTP client, the normalized server URL and the
//! admin session. Each method resolves the bearer token and delegates the
//! HTTP call to [`crate::endpoints`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Token acquisition and lookup (private module)
//! - `users`, `clients`: Entity lookups by name
//! - `roles`: Client role mappings of a user
//! - `authz`: Authorization services of a client
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token storage (delegated to [`crate::auth::SessionManager`])
//!
//! # Invariants
//! - Admin calls fail with [`crate::ClientError::NotAuthenticated`] until
//!   [`KeycloakClient::authenticate`] has succeeded
//! - Failed calls are never retried

pub mod builder;
mod session;

mod authz;
mod clients;
mod roles;
mod users;

use crate::auth::SessionManager;

/// Keycloak admin REST API client.
///
/// ```rust,ignore
/// use keycloak_client::KeycloakClient;
/// use keycloak_config::Config;
///
/// let mut client = KeycloakClient::builder().from_config(&config).build()?;
/// client.authenticate().await?;
/// let user_id = client.find_user_id("example", "alice").await?;
/// ```
#[derive(Debug)]
pub struct KeycloakClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
}

impl KeycloakClient {
    /// Create a new client builder.
    pub fn builder() -> builder::KeycloakClientBuilder {
        builder::KeycloakClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
