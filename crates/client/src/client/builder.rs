//! Client builder for constructing [`KeycloakClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`KeycloakClient`] methods)
//! - Token management (handled by [`SessionManager`] in `auth.rs`)
//!
//! # Invariants
//! - `base_url` and `credentials` must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::{AdminCredentials, SessionManager};
use crate::client::KeycloakClient;
use crate::error::{ClientError, Result};
use keycloak_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`KeycloakClient`].
///
/// All options have defaults except `base_url` and `credentials`.
pub struct KeycloakClientBuilder {
    base_url: Option<String>,
    credentials: Option<AdminCredentials>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for KeycloakClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl KeycloakClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server root URL, e.g. `http://localhost:8080`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the credentials used for the password grant.
    pub fn credentials(mut self, credentials: AdminCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// ```rust,ignore
    /// use keycloak_client::KeycloakClient;
    /// use keycloak_config::Config;
    ///
    /// let config = Config::default();
    /// let client = KeycloakClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(AdminCredentials::from(&config.auth));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"http://localhost:8080/"` -> `"http://localhost:8080"`
    /// - `"https://sso.example.com//"` -> `"https://sso.example.com"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`KeycloakClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if `credentials` were not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<KeycloakClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(KeycloakClient {
            http,
            base_url,
            session_manager: SessionManager::new(credentials),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_from_config_with_password_grant() {
        let mut config = Config::default();
        config.connection.base_url = "https://sso.example.com".to_string();
        config.auth.username = "root".to_string();
        config.auth.password = SecretString::new("s3cret".to_string().into());

        let client = KeycloakClient::builder().from_config(&config).build().unwrap();

        assert_eq!(client.base_url(), "https://sso.example.com");
        assert_eq!(client.session_manager.credentials().username, "root");
        assert_eq!(client.session_manager.credentials().realm, "master");
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::default();
        config.connection.base_url = "https://sso.example.com".to_string();
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);

        let builder = KeycloakClient::builder().from_config(&config);

        assert_eq!(builder.base_url, Some("https://sso.example.com".to_string()));
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_normalize_base_url_trailing_slash() {
        assert_eq!(
            KeycloakClientBuilder::normalize_base_url("http://localhost:8080/".to_string()),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        assert_eq!(
            KeycloakClientBuilder::normalize_base_url("https://sso.example.com//".to_string()),
            "https://sso.example.com"
        );
    }
}
