//! Admin token acquisition for [`KeycloakClient`].
//!
//! # Invariants
//! - [`KeycloakClient::authenticate`] is the only method that mutates the session
//! - A token is requested once per run; expiry is logged, not refreshed

use crate::client::KeycloakClient;
use crate::endpoints;
use crate::error::{ClientError, Result};

impl KeycloakClient {
    /// Obtain an admin token with the configured credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the credentials are rejected.
    pub async fn authenticate(&mut self) -> Result<()> {
        let response = endpoints::request_password_token(
            &self.http,
            &self.base_url,
            self.session_manager.credentials(),
        )
        .await?;

        self.session_manager
            .set_access_token(response.access_token, response.expires_in);
        tracing::debug!(
            realm = %self.session_manager.credentials().realm,
            "Authenticated against Keycloak"
        );
        Ok(())
    }

    /// True once [`Self::authenticate`] has succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.session_manager.is_authenticated()
    }

    pub(crate) fn get_auth_token(&self) -> Result<&str> {
        if self.session_manager.is_token_expired() {
            tracing::warn!("Admin token lifetime has elapsed; requests may be rejected");
        }
        self.session_manager
            .bearer_token()
            .ok_or(ClientError::NotAuthenticated)
    }
}
