//! Assign realm-management client roles to a user.
//!
//! Responsibilities:
//! - Parse the comma-separated role list.
//! - Resolve the `realm-management` client and the target user.
//! - Assign the requested roles that are currently available to the user, in one call.
//!
//! Does NOT handle:
//! - Creating roles or users.
//! - Reporting requested roles that are unknown or already assigned (they are skipped).
//!
//! Invariants:
//! - An empty role list performs no API call, not even authentication.
//! - No assignment call is made when the user cannot be resolved.

use anyhow::{Context, Result};
use keycloak_client::{AdminApi, KeycloakClient, NamedEntry, Role};
use tracing::{debug, info, warn};

use crate::args::AssignRolesCli;
use crate::error::ProvisionError;
use crate::runtime::{build_config, require};

/// clientId of the built-in client owning the realm admin roles.
pub const REALM_MANAGEMENT_CLIENT_ID: &str = "realm-management";

/// What [`assign_roles`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The requested role list was empty.
    NoRolesRequested,
    /// The user already holds every realm-management role.
    NothingAvailable,
    /// None of the requested roles is available to the user.
    NoMatch,
    /// These role names were assigned.
    Assigned(Vec<String>),
}

/// Split a comma-separated role list, trimming whitespace and dropping empty entries.
pub fn parse_role_list(roles: Option<&str>) -> Vec<String> {
    roles
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Available roles whose name is in `requested`, in server order.
pub fn select_requested_roles(available: &[Role], requested: &[String]) -> Vec<Role> {
    available
        .iter()
        .filter(|role| {
            role.entry_name()
                .is_some_and(|name| requested.iter().any(|r| r == name))
        })
        .cloned()
        .collect()
}

/// Assign the requested realm-management roles of `realm` to `username`.
pub async fn assign_roles<A>(
    api: &mut A,
    realm: &str,
    username: &str,
    requested: &[String],
) -> Result<AssignOutcome>
where
    A: AdminApi + ?Sized,
{
    if requested.is_empty() {
        return Ok(AssignOutcome::NoRolesRequested);
    }

    api.authenticate().await.context("Failed to authenticate")?;

    let client_uuid = api
        .find_client_id(realm, REALM_MANAGEMENT_CLIENT_ID)
        .await
        .context("Failed to look up the realm-management client")?
        .ok_or_else(|| ProvisionError::ClientNotFound {
            realm: realm.to_string(),
            client_id: REALM_MANAGEMENT_CLIENT_ID.to_string(),
        })?;

    let user_id = api
        .find_user_id(realm, username)
        .await
        .with_context(|| format!("Failed to look up user '{}'", username))?
        .ok_or_else(|| ProvisionError::UserNotFound {
            realm: realm.to_string(),
            username: username.to_string(),
        })?;

    let available = api
        .list_available_client_roles(realm, &user_id, &client_uuid)
        .await
        .context("Failed to list available realm-management roles")?;
    if available.is_empty() {
        info!(user = %username, "No realm-management roles left to assign");
        return Ok(AssignOutcome::NothingAvailable);
    }

    let selected = select_requested_roles(&available, requested);
    if selected.is_empty() {
        warn!(user = %username, requested = ?requested, "None of the requested roles is available");
        return Ok(AssignOutcome::NoMatch);
    }

    let names: Vec<String> = selected
        .iter()
        .filter_map(|r| r.entry_name().map(str::to_string))
        .collect();
    debug!(roles = ?names, "Assigning realm-management roles");

    api.assign_client_roles(realm, &user_id, &client_uuid, &selected)
        .await
        .with_context(|| format!("Failed to assign roles to user '{}'", username))?;

    info!(user = %username, realm = %realm, roles = ?names, "Assigned realm-management roles");
    Ok(AssignOutcome::Assigned(names))
}

/// Entry point of the `assign-admin-roles` binary.
pub async fn execute(cli: AssignRolesCli) -> Result<()> {
    let roles = parse_role_list(cli.roles.as_deref());
    if roles.is_empty() {
        eprintln!("Warning: No role is set");
        return Ok(());
    }

    let realm = require(&cli.connection.realm_name, "--realm-name")?;
    let username = require(&cli.admin_user, "--admin-user")?;

    let config = build_config(&cli.connection)?;
    let mut client = KeycloakClient::builder().from_config(&config).build()?;

    assign_roles(&mut client, realm, username, &roles).await?;
    Ok(())
}
