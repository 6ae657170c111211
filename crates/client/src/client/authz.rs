//! Authorization services of a client for [`KeycloakClient`].

use crate::client::KeycloakClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AuthzPermission, AuthzPolicy, AuthzResource};

impl KeycloakClient {
    pub async fn list_authz_resources(&self, realm: &str, client_uuid: &str) -> Result<Vec<AuthzResource>> {
        let token = self.get_auth_token()?;
        endpoints::list_authz_resources(&self.http, &self.base_url, token, realm, client_uuid).await
    }

    pub async fn delete_authz_resource(&self, realm: &str, client_uuid: &str, resource_id: &str) -> Result<()> {
        let token = self.get_auth_token()?;
        endpoints::delete_authz_resource(&self.http, &self.base_url, token, realm, client_uuid, resource_id)
            .await
    }

    /// Policies only; permissions are listed by [`Self::list_authz_permissions`].
    pub async fn list_authz_policies(&self, realm: &str, client_uuid: &str) -> Result<Vec<AuthzPolicy>> {
        let token = self.get_auth_token()?;
        endpoints::list_authz_policies(&self.http, &self.base_url, token, realm, client_uuid).await
    }

    pub async fn delete_authz_policy(&self, realm: &str, client_uuid: &str, policy_id: &str) -> Result<()> {
        let token = self.get_auth_token()?;
        endpoints::delete_authz_policy(&self.http, &self.base_url, token, realm, client_uuid, policy_id)
            .await
    }

    pub async fn list_authz_permissions(&self, realm: &str, client_uuid: &str) -> Result<Vec<AuthzPermission>> {
        let token = self.get_auth_token()?;
        endpoints::list_authz_permissions(&self.http, &self.base_url, token, realm, client_uuid).await
    }

    /// Delete a resource-based permission; anything but `204 No Content` is an error.
    pub async fn delete_authz_permission(
        &self,
        realm: &str,
        client_uuid: &str,
        permission_id: &str,
    ) -> Result<()> {
        let token = self.get_auth_token()?;
        endpoints::delete_authz_permission(
            &self.http,
            &self.base_url,
            token,
            realm,
            client_uuid,
            permission_id,
        )
        .await
    }
}
