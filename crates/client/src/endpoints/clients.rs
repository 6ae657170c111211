//! Client lookup endpoints.

use reqwest::Client;

use crate::endpoints::{admin_realm_url, send_request};
use crate::error::Result;
use crate::models::ClientRepresentation;

/// List clients whose `clientId` matches `client_id`.
pub async fn find_clients_by_client_id(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    realm: &str,
    client_id: &str,
) -> Result<Vec<ClientRepresentation>> {
    let url = format!("{}/clients", admin_realm_url(base_url, realm));

    let builder = client
        .get(&url)
        .bearer_auth(auth_token)
        .query(&[("clientId", client_id)]);
    let response = send_request(builder, "/admin/realms/{realm}/clients", "GET").await?;

    Ok(response.json().await?)
}
