//! Client lookups for [`KeycloakClient`].

use crate::client::KeycloakClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ClientRepresentation, NamedEntry};

impl KeycloakClient {
    /// List clients of `realm` matching `client_id`.
    pub async fn find_clients(&self, realm: &str, client_id: &str) -> Result<Vec<ClientRepresentation>> {
        let token = self.get_auth_token()?;
        endpoints::find_clients_by_client_id(&self.http, &self.base_url, token, realm, client_id)
            .await
    }

    /// Resolve a `clientId` to the client's internal UUID.
    pub async fn find_client_id(&self, realm: &str, client_id: &str) -> Result<Option<String>> {
        let clients = self.find_clients(realm, client_id).await?;
        Ok(clients
            .iter()
            .find(|c| c.entry_name() == Some(client_id))
            .and_then(|c| c.entry_id().map(str::to_string)))
    }
}
