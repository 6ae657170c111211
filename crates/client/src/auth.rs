//! Admin credentials and access token storage.

use secrecy::{ExposeSecret, SecretString};
use std::time::{Duration, Instant};

use keycloak_config::AuthConfig;

/// Credentials for the OIDC password grant used to obtain an admin token.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    /// Realm that issues the admin token (usually `master`).
    pub realm: String,
    /// Client used for the grant (usually `admin-cli`).
    pub client_id: String,
    /// Secret for confidential clients.
    pub client_secret: Option<SecretString>,
    pub username: String,
    pub password: SecretString,
}

impl From<&AuthConfig> for AdminCredentials {
    fn from(auth: &AuthConfig) -> Self {
        Self {
            realm: auth.realm.clone(),
            client_id: auth.client_id.clone(),
            client_secret: auth.client_secret.clone(),
            username: auth.username.clone(),
            password: auth.password.clone(),
        }
    }
}

/// Holds the admin credentials and the bearer token obtained with them.
///
/// The token is acquired once per run and kept in memory only.
#[derive(Debug)]
pub struct SessionManager {
    credentials: AdminCredentials,
    access_token: Option<AccessToken>,
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: SecretString,
    expires_at: Option<Instant>,
}

impl SessionManager {
    /// Create a new session manager with the given credentials.
    pub fn new(credentials: AdminCredentials) -> Self {
        Self {
            credentials,
            access_token: None,
        }
    }

    pub fn credentials(&self) -> &AdminCredentials {
        &self.credentials
    }

    /// Store the access token from a token endpoint response.
    ///
    /// `expires_in` is the lifetime in seconds reported by the server, if any.
    /// A lifetime past the platform's `Instant` range leaves the token without
    /// a local expiry.
    pub fn set_access_token(&mut self, token: String, expires_in: Option<u64>) {
        self.access_token = Some(AccessToken {
            value: SecretString::new(token.into()),
            expires_at: expires_in
                .and_then(|secs| Instant::now().checked_add(Duration::from_secs(secs))),
        });
    }

    /// Bearer token for admin requests, if authenticated.
    pub fn bearer_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(|t| t.value.expose_secret())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// True once the server-reported lifetime has elapsed.
    ///
    /// Tokens without a reported lifetime never expire locally.
    pub fn is_token_expired(&self) -> bool {
        self.access_token
            .as_ref()
            .and_then(|t| t.expires_at)
            .map(|exp| exp.saturating_duration_since(Instant::now()).is_zero())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> AdminCredentials {
        AdminCredentials::from(&AuthConfig::default())
    }

    #[test]
    fn test_new_session_is_unauthenticated() {
        let manager = SessionManager::new(credentials());
        assert!(!manager.is_authenticated());
        assert!(manager.bearer_token().is_none());
        assert!(!manager.is_token_expired());
    }

    #[test]
    fn test_set_access_token() {
        let mut manager = SessionManager::new(credentials());
        manager.set_access_token("eyJ.token".to_string(), Some(60));
        assert!(manager.is_authenticated());
        assert_eq!(manager.bearer_token(), Some("eyJ.token"));
        assert!(!manager.is_token_expired());
    }

    #[test]
    fn test_zero_lifetime_token_is_expired() {
        let mut manager = SessionManager::new(credentials());
        manager.set_access_token("eyJ.token".to_string(), Some(0));
        assert!(manager.is_token_expired());
    }

    #[test]
    fn test_out_of_range_lifetime_never_expires() {
        let mut manager = SessionManager::new(credentials());
        manager.set_access_token("eyJ.token".to_string(), Some(u64::MAX));
        assert!(manager.is_authenticated());
        assert!(!manager.is_token_expired());
    }

    #[test]
    fn test_credentials_from_auth_config() {
        let creds = credentials();
        assert_eq!(creds.realm, "master");
        assert_eq!(creds.client_id, "admin-cli");
        assert_eq!(creds.username, "admin");
        assert!(creds.client_secret.is_none());
    }
}
