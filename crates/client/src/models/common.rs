//! Common types shared across Keycloak API models.

use serde::Deserialize;

/// Error payload returned by Keycloak.
///
/// The OIDC endpoints answer with `error`/`error_description`, the admin API
/// with `errorMessage` (older versions) or `error`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct KeycloakErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<String>,
}

impl KeycloakErrorBody {
    /// Best human-readable message in the payload, if any.
    pub fn message(&self) -> Option<String> {
        match (&self.error, &self.error_description, &self.error_message) {
            (_, _, Some(msg)) => Some(msg.clone()),
            (Some(err), Some(desc), None) => Some(format!("{err}: {desc}")),
            (Some(err), None, None) => Some(err.clone()),
            (None, Some(desc), None) => Some(desc.clone()),
            (None, None, None) => None,
        }
    }
}

/// An admin API object addressed by id and matched by name.
pub trait NamedEntry {
    fn entry_name(&self) -> Option<&str>;
    fn entry_id(&self) -> Option<&str>;
}
