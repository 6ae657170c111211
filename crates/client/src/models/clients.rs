//! Client (application registration) models.

use serde::Deserialize;

use crate::models::common::NamedEntry;

/// Subset of the Keycloak client representation.
///
/// `client_id` is the human-facing name (e.g. `realm-management`); `id` is the
/// internal UUID used in admin API paths.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientRepresentation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub authorization_services_enabled: Option<bool>,
}

impl NamedEntry for ClientRepresentation {
    fn entry_name(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    fn entry_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
