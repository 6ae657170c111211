//! Role models for the Keycloak role-mapping API.

use serde::{Deserialize, Serialize};

use crate::models::common::NamedEntry;

/// Keycloak role representation.
///
/// Roles fetched from `role-mappings/.../available` are posted back unchanged
/// when assigning, so every field round-trips.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// True when the role aggregates other roles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<bool>,
    /// True for client roles, false for realm roles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_role: Option<bool>,
    /// Id of the owning client or realm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
}

impl Role {
    /// Convenience constructor for a named role.
    pub fn named(id: &str, name: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl NamedEntry for Role {
    fn entry_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn entry_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
