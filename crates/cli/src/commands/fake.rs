//! Recording in-memory [`AdminApi`] for command tests.

use std::sync::Mutex;

use async_trait::async_trait;
use keycloak_client::{
    AdminApi, AuthzPermission, AuthzPolicy, AuthzResource, ClientError, Result, Role,
};

#[derive(Default)]
pub(crate) struct FakeAdmin {
    clients: Vec<(String, String)>,
    users: Vec<(String, String)>,
    available_roles: Vec<Role>,
    resources: Vec<AuthzResource>,
    policies: Vec<AuthzPolicy>,
    permissions: Vec<AuthzPermission>,
    permission_delete_status: Option<(u16, String)>,
    failing_deletes: Vec<&'static str>,
    fail_authentication: bool,
    authenticated: bool,
    calls: Mutex<Vec<String>>,
    assignments: Mutex<Vec<Vec<Role>>>,
}

impl FakeAdmin {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_client(mut self, client_id: &str, uuid: &str) -> Self {
        self.clients.push((client_id.to_string(), uuid.to_string()));
        self
    }

    pub(crate) fn with_user(mut self, username: &str, id: &str) -> Self {
        self.users.push((username.to_string(), id.to_string()));
        self
    }

    pub(crate) fn with_available_roles(mut self, roles: Vec<Role>) -> Self {
        self.available_roles = roles;
        self
    }

    pub(crate) fn with_resources(mut self, resources: Vec<AuthzResource>) -> Self {
        self.resources = resources;
        self
    }

    pub(crate) fn with_policies(mut self, policies: Vec<AuthzPolicy>) -> Self {
        self.policies = policies;
        self
    }

    pub(crate) fn with_permissions(mut self, permissions: Vec<AuthzPermission>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Answer every permission delete with `status` and `body`.
    pub(crate) fn with_permission_delete_status(mut self, status: u16, body: &str) -> Self {
        self.permission_delete_status = Some((status, body.to_string()));
        self
    }

    /// Answer every call to the delete `method` with a 500 API error.
    pub(crate) fn with_failing_delete(mut self, method: &'static str) -> Self {
        self.failing_deletes.push(method);
        self
    }

    pub(crate) fn failing_authentication(mut self) -> Self {
        self.fail_authentication = true;
        self
    }

    /// Every call in order, as `method` or `method:argument`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count_calls(&self, method: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.split(':').next() == Some(method))
            .count()
    }

    /// Ids passed to `method`.
    pub(crate) fn deleted(&self, method: &str) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|c| c.strip_prefix(method).and_then(|rest| rest.strip_prefix(':')))
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn assignments(&self) -> Vec<Vec<Role>> {
        self.assignments.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> Result<()> {
        self.calls.lock().unwrap().push(call.into());
        if self.authenticated {
            Ok(())
        } else {
            Err(ClientError::NotAuthenticated)
        }
    }

    fn record_delete(&self, method: &'static str, id: &str) -> Result<()> {
        self.record(format!("{method}:{id}"))?;
        if self.failing_deletes.contains(&method) {
            return Err(ClientError::ApiError {
                status: 500,
                url: format!("http://fake/{method}/{id}"),
                message: "unknown_error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AdminApi for FakeAdmin {
    async fn authenticate(&mut self) -> Result<()> {
        self.calls.lock().unwrap().push("authenticate".to_string());
        if self.fail_authentication {
            return Err(ClientError::AuthFailed(
                "invalid_grant: Invalid user credentials".to_string(),
            ));
        }
        self.authenticated = true;
        Ok(())
    }

    async fn find_user_id(&self, _realm: &str, username: &str) -> Result<Option<String>> {
        self.record(format!("find_user_id:{username}"))?;
        Ok(self
            .users
            .iter()
            .find(|(name, _)| name == username)
            .map(|(_, id)| id.clone()))
    }

    async fn find_client_id(&self, _realm: &str, client_id: &str) -> Result<Option<String>> {
        self.record(format!("find_client_id:{client_id}"))?;
        Ok(self
            .clients
            .iter()
            .find(|(name, _)| name == client_id)
            .map(|(_, uuid)| uuid.clone()))
    }

    async fn list_available_client_roles(
        &self,
        _realm: &str,
        _user_id: &str,
        _client_uuid: &str,
    ) -> Result<Vec<Role>> {
        self.record("list_available_client_roles")?;
        Ok(self.available_roles.clone())
    }

    async fn assign_client_roles(
        &self,
        _realm: &str,
        _user_id: &str,
        _client_uuid: &str,
        roles: &[Role],
    ) -> Result<()> {
        self.record("assign_client_roles")?;
        self.assignments.lock().unwrap().push(roles.to_vec());
        Ok(())
    }

    async fn list_authz_resources(&self, _realm: &str, _client_uuid: &str) -> Result<Vec<AuthzResource>> {
        self.record("list_authz_resources")?;
        Ok(self.resources.clone())
    }

    async fn delete_authz_resource(&self, _realm: &str, _client_uuid: &str, resource_id: &str) -> Result<()> {
        self.record_delete("delete_authz_resource", resource_id)
    }

    async fn list_authz_policies(&self, _realm: &str, _client_uuid: &str) -> Result<Vec<AuthzPolicy>> {
        self.record("list_authz_policies")?;
        Ok(self.policies.clone())
    }

    async fn delete_authz_policy(&self, _realm: &str, _client_uuid: &str, policy_id: &str) -> Result<()> {
        self.record_delete("delete_authz_policy", policy_id)
    }

    async fn list_authz_permissions(&self, _realm: &str, _client_uuid: &str) -> Result<Vec<AuthzPermission>> {
        self.record("list_authz_permissions")?;
        Ok(self.permissions.clone())
    }

    async fn delete_authz_permission(
        &self,
        _realm: &str,
        client_uuid: &str,
        permission_id: &str,
    ) -> Result<()> {
        self.record(format!("delete_authz_permission:{permission_id}"))?;
        match &self.permission_delete_status {
            Some((status, body)) => Err(ClientError::UnexpectedStatus {
                expected: 204,
                status: *status,
                url: format!(
                    "http://fake/clients/{client_uuid}/authz/resource-server/permission/resource/{permission_id}"
                ),
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}
