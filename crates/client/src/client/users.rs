//! User lookups for [`KeycloakClient`].

use crate::client::KeycloakClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{NamedEntry, User};

impl KeycloakClient {
    /// Search users of `realm` by exact username.
    pub async fn find_users(&self, realm: &str, username: &str) -> Result<Vec<User>> {
        let token = self.get_auth_token()?;
        endpoints::find_users_by_username(&self.http, &self.base_url, token, realm, username).await
    }

    /// Resolve a username to the user's internal id.
    ///
    /// Keycloak stores usernames lowercased, so the match ignores ASCII case.
    pub async fn find_user_id(&self, realm: &str, username: &str) -> Result<Option<String>> {
        let users = self.find_users(realm, username).await?;
        Ok(users
            .iter()
            .find(|u| {
                u.entry_name()
                    .is_some_and(|name| name.eq_ignore_ascii_case(username))
            })
            .and_then(|u| u.entry_id().map(str::to_string)))
    }
}
