//! The admin operations the provisioning commands depend on.
//!
//! Commands are written against [`AdminApi`] rather than [`KeycloakClient`]
//! so their control flow can be exercised without a server.
//!
//! # Invariants
//! - Every method except [`AdminApi::authenticate`] requires a prior
//!   successful `authenticate` call
//! - Lookups return `Ok(None)` when nothing matches; transport and server
//!   failures are errors

use async_trait::async_trait;

use crate::client::KeycloakClient;
use crate::error::Result;
use crate::models::{AuthzPermission, AuthzPolicy, AuthzResource, Role};

/// Keycloak admin operations used by the provisioning tools.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Obtain an admin token.
    async fn authenticate(&mut self) -> Result<()>;

    /// Internal id of the user named `username` in `realm`.
    async fn find_user_id(&self, realm: &str, username: &str) -> Result<Option<String>>;

    /// Internal UUID of the client whose `clientId` is `client_id` in `realm`.
    async fn find_client_id(&self, realm: &str, client_id: &str) -> Result<Option<String>>;

    async fn list_available_client_roles(
        &self,
        realm: &str,
        user_id: &str,
        client_uuid: &str,
    ) -> Result<Vec<Role>>;

    async fn assign_client_roles(
        &self,
        realm: &str,
        user_id: &str,
        client_uuid: &str,
        roles: &[Role],
    ) -> Result<()>;

    async fn list_authz_resources(&self, realm: &str, client_uuid: &str) -> Result<Vec<AuthzResource>>;

    async fn delete_authz_resource(&self, realm: &str, client_uuid: &str, resource_id: &str) -> Result<()>;

    async fn list_authz_policies(&self, realm: &str, client_uuid: &str) -> Result<Vec<AuthzPolicy>>;

    async fn delete_authz_policy(&self, realm: &str, client_uuid: &str, policy_id: &str) -> Result<()>;

    async fn list_authz_permissions(&self, realm: &str, client_uuid: &str) -> Result<Vec<AuthzPermission>>;

    /// Must fail unless the server answers `204 No Content`.
    async fn delete_authz_permission(
        &self,
        realm: &str,
        client_uuid: &str,
        permission_id: &str,
    ) -> Result<()>;
}

#[async_trait]
impl AdminApi for KeycloakClient {
    async fn authenticate(&mut self) -> Result<()> {
        KeycloakClient::authenticate(self).await
    }

    async fn find_user_id(&self, realm: &str, username: &str) -> Result<Option<String>> {
        KeycloakClient::find_user_id(self, realm, username).await
    }

    async fn find_client_id(&self, realm: &str, client_id: &str) -> Result<Option<String>> {
        KeycloakClient::find_client_id(self, realm, client_id).await
    }

    async fn list_available_client_roles(
        &self,
        realm: &str,
        user_id: &str,
        client_uuid: &str,
    ) -> Result<Vec<Role>> {
        KeycloakClient::list_available_client_roles(self, realm, user_id, client_uuid).await
    }

    async fn assign_client_roles(
        &self,
        realm: &str,
        user_id: &str,
        client_uuid: &str,
        roles: &[Role],
    ) -> Result<()> {
        KeycloakClient::assign_client_roles(self, realm, user_id, client_uuid, roles).await
    }

    async fn list_authz_resources(&self, realm: &str, client_uuid: &str) -> Result<Vec<AuthzResource>> {
        KeycloakClient::list_authz_resources(self, realm, client_uuid).await
    }

    async fn delete_authz_resource(&self, realm: &str, client_uuid: &str, resource_id: &str) -> Result<()> {
        KeycloakClient::delete_authz_resource(self, realm, client_uuid, resource_id).await
    }

    async fn list_authz_policies(&self, realm: &str, client_uuid: &str) -> Result<Vec<AuthzPolicy>> {
        KeycloakClient::list_authz_policies(self, realm, client_uuid).await
    }

    async fn delete_authz_policy(&self, realm: &str, client_uuid: &str, policy_id: &str) -> Result<()> {
        KeycloakClient::delete_authz_policy(self, realm, client_uuid, policy_id).await
    }

    async fn list_authz_permissions(&self, realm: &str, client_uuid: &str) -> Result<Vec<AuthzPermission>> {
        KeycloakClient::list_authz_permissions(self, realm, client_uuid).await
    }

    async fn delete_authz_permission(
        &self,
        realm: &str,
        client_uuid: &str,
        permission_id: &str,
    ) -> Result<()> {
        KeycloakClient::delete_authz_permission(self, realm, client_uuid, permission_id).await
    }
}
