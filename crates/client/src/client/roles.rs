//! Client role mappings for [`KeycloakClient`].

use crate::client::KeycloakClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Role;

impl KeycloakClient {
    /// Roles of `client_uuid` not yet mapped to `user_id`.
    pub async fn list_available_client_roles(
        &self,
        realm: &str,
        user_id: &str,
        client_uuid: &str,
    ) -> Result<Vec<Role>> {
        let token = self.get_auth_token()?;
        endpoints::list_available_client_roles(
            &self.http,
            &self.base_url,
            token,
            realm,
            user_id,
            client_uuid,
        )
        .await
    }

    /// Map `roles` of `client_uuid` to `user_id`.
    pub async fn assign_client_roles(
        &self,
        realm: &str,
        user_id: &str,
        client_uuid: &str,
        roles: &[Role],
    ) -> Result<()> {
        let token = self.get_auth_token()?;
        endpoints::add_client_role_mappings(
            &self.http,
            &self.base_url,
            token,
            realm,
            user_id,
            client_uuid,
            roles,
        )
        .await
    }
}
