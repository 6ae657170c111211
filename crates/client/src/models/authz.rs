//! Authorization-services models (resource server objects of a client).

use serde::Deserialize;

use crate::models::common::NamedEntry;

/// Name Keycloak gives the resource it creates with a new resource server.
pub const DEFAULT_RESOURCE_NAME: &str = "Default Resource";
/// Name of the auto-created JavaScript policy.
pub const DEFAULT_POLICY_NAME: &str = "Default Policy";
/// Name of the auto-created resource permission.
pub const DEFAULT_PERMISSION_NAME: &str = "Default Permission";

/// Authorization resource. Keycloak serializes its id as `_id`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthzResource {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub uris: Vec<String>,
}

/// Authorization policy. Permissions share the representation.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthzPolicy {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub policy_type: Option<String>,
    #[serde(default)]
    pub logic: Option<String>,
    #[serde(default)]
    pub decision_strategy: Option<String>,
}

/// Authorization permission (a policy of type `resource` or `scope`).
pub type AuthzPermission = AuthzPolicy;

impl NamedEntry for AuthzResource {
    fn entry_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn entry_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl NamedEntry for AuthzPolicy {
    fn entry_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn entry_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_is_underscore_id() {
        let json = r#"{
            "name": "Default Resource",
            "type": "urn:example:resources:default",
            "owner": {"id": "c1", "name": "example"},
            "ownerManagedAccess": false,
            "_id": "r1",
            "uris": ["/*"]
        }"#;
        let resource: AuthzResource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.entry_id(), Some("r1"));
        assert_eq!(resource.entry_name(), Some(DEFAULT_RESOURCE_NAME));
        assert_eq!(resource.uris, vec!["/*"]);
    }

    #[test]
    fn test_resource_with_plain_id_has_no_entry_id() {
        let resource: AuthzResource =
            serde_json::from_str(r#"{"name": "Default Resource", "id": "r1"}"#).unwrap();
        assert_eq!(resource.entry_id(), None);
    }

    #[test]
    fn test_deserialize_permission() {
        let json = r#"{
            "id": "p1",
            "name": "Default Permission",
            "description": "A permission that applies to the default resource type",
            "type": "resource",
            "logic": "POSITIVE",
            "decisionStrategy": "UNANIMOUS",
            "config": {}
        }"#;
        let permission: AuthzPermission = serde_json::from_str(json).unwrap();
        assert_eq!(permission.entry_id(), Some("p1"));
        assert_eq!(permission.entry_name(), Some(DEFAULT_PERMISSION_NAME));
        assert_eq!(permission.policy_type.as_deref(), Some("resource"));
        assert_eq!(permission.decision_strategy.as_deref(), Some("UNANIMOUS"));
    }
}
