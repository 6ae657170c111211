//! Delete the authorization objects Keycloak creates for a new client.
//!
//! Responsibilities:
//! - Resolve the client by `clientId`.
//! - Sweep resources, then policies, then permissions, deleting the entries
//!   carrying the default names.
//!
//! Does NOT handle:
//! - Enabling or disabling authorization services on the client.
//! - Rolling back earlier deletions when a later sweep fails.
//!
//! Invariants:
//! - Sweep order is fixed: resource, policy, permission.
//! - The first failure aborts the remaining sweeps.
//! - A permission delete succeeds only on `204 No Content`.

use anyhow::{Context, Result};
use keycloak_client::models::{DEFAULT_PERMISSION_NAME, DEFAULT_POLICY_NAME, DEFAULT_RESOURCE_NAME};
use keycloak_client::{AdminApi, ClientError, KeycloakClient, NamedEntry};
use tracing::{debug, info};

use crate::args::DeleteDefaultAuthzCli;
use crate::error::ProvisionError;
use crate::runtime::{build_config, require};

/// Number of objects removed by each sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub resources: usize,
    pub policies: usize,
    pub permissions: usize,
}

impl CleanupReport {
    pub fn total(&self) -> usize {
        self.resources + self.policies + self.permissions
    }
}

/// Ids of the entries named exactly `name`; entries without a name or id are skipped.
pub fn ids_named<T: NamedEntry>(entries: &[T], name: &str) -> Vec<String> {
    entries
        .iter()
        .filter(|e| e.entry_name() == Some(name))
        .filter_map(|e| e.entry_id().map(str::to_string))
        .collect()
}

/// Delete the default resource, policy and permission of `client_name` in `realm`.
pub async fn delete_default_authz<A>(api: &mut A, realm: &str, client_name: &str) -> Result<CleanupReport>
where
    A: AdminApi + ?Sized,
{
    api.authenticate().await.context("Failed to authenticate")?;

    let client_uuid = api
        .find_client_id(realm, client_name)
        .await
        .with_context(|| format!("Failed to look up client '{}'", client_name))?
        .ok_or_else(|| ProvisionError::ClientNotFound {
            realm: realm.to_string(),
            client_id: client_name.to_string(),
        })?;

    let mut report = CleanupReport::default();

    let resources = api
        .list_authz_resources(realm, &client_uuid)
        .await
        .context("Failed to list authorization resources")?;
    for id in ids_named(&resources, DEFAULT_RESOURCE_NAME) {
        api.delete_authz_resource(realm, &client_uuid, &id)
            .await
            .with_context(|| format!("Failed to delete {} default resource", client_uuid))?;
        debug!(resource_id = %id, "Deleted default resource");
        report.resources += 1;
    }

    let policies = api
        .list_authz_policies(realm, &client_uuid)
        .await
        .context("Failed to list authorization policies")?;
    for id in ids_named(&policies, DEFAULT_POLICY_NAME) {
        api.delete_authz_policy(realm, &client_uuid, &id)
            .await
            .with_context(|| format!("Failed to delete {} default policy", client_uuid))?;
        debug!(policy_id = %id, "Deleted default policy");
        report.policies += 1;
    }

    let permissions = api
        .list_authz_permissions(realm, &client_uuid)
        .await
        .context("Failed to list authorization permissions")?;
    for id in ids_named(&permissions, DEFAULT_PERMISSION_NAME) {
        match api.delete_authz_permission(realm, &client_uuid, &id).await {
            Ok(()) => {}
            Err(ClientError::UnexpectedStatus { body, .. }) => {
                return Err(ProvisionError::DefaultPermissionDelete {
                    client_uuid: client_uuid.clone(),
                    body,
                }
                .into());
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to delete {} default permission", client_uuid)));
            }
        }
        debug!(permission_id = %id, "Deleted default permission");
        report.permissions += 1;
    }

    info!(
        client = %client_name,
        realm = %realm,
        resources = report.resources,
        policies = report.policies,
        permissions = report.permissions,
        "Default authorization cleanup finished"
    );
    Ok(report)
}

/// Entry point of the `delete-client-default-authz` binary.
pub async fn execute(cli: DeleteDefaultAuthzCli) -> Result<()> {
    let realm = require(&cli.connection.realm_name, "--realm-name")?;
    let client_name = require(&cli.client_name, "--client-name")?;

    let config = build_config(&cli.connection)?;
    let mut client = KeycloakClient::builder().from_config(&config).build()?;

    delete_default_authz(&mut client, realm, client_name).await?;
    Ok(())
}
