//! User models.

use serde::Deserialize;

use crate::models::common::NamedEntry;

/// Subset of the Keycloak user representation used for id lookup.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub email: Option<String>,
}

impl NamedEntry for User {
    fn entry_name(&self) -> Option<&str> {
        self.username.as_deref()
    }

    fn entry_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
