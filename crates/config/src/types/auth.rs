//! Admin authentication settings.
//!
//! Responsibilities:
//! - Hold the password grant credentials used to obtain an admin token.
//!
//! Does NOT handle:
//! - The token exchange itself (see `keycloak_client::endpoints::request_password_token`).
//!
//! Invariants:
//! - `password` and `client_secret` are `SecretString` and never appear in `Debug` output.

use secrecy::{ExposeSecret, SecretString};

use crate::constants::{
    DEFAULT_ADMIN_CLIENT_ID, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, DEFAULT_AUTH_REALM,
};

/// Credentials for the admin password grant.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Realm the admin user lives in (usually `master`).
    pub realm: String,
    /// OIDC client used for the token request (usually `admin-cli`).
    pub client_id: String,
    /// Secret for confidential admin clients; public clients leave this unset.
    pub client_secret: Option<SecretString>,
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: SecretString,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            realm: DEFAULT_AUTH_REALM.to_string(),
            client_id: DEFAULT_ADMIN_CLIENT_ID.to_string(),
            client_secret: None,
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: SecretString::new(DEFAULT_ADMIN_PASSWORD.to_string().into()),
        }
    }
}

impl AuthConfig {
    /// True when the credentials are the stock `admin`/`admin` pair.
    pub fn is_default_credentials(&self) -> bool {
        self.username == DEFAULT_ADMIN_USERNAME
            && self.password.expose_secret() == DEFAULT_ADMIN_PASSWORD
    }
}
