//! Client-level role mappings of a user.

use reqwest::Client;

use crate::endpoints::{admin_realm_url, encode_path_segment, send_request};
use crate::error::Result;
use crate::models::Role;

fn user_client_mappings_url(base_url: &str, realm: &str, user_id: &str, client_uuid: &str) -> String {
    format!(
        "{}/users/{}/role-mappings/clients/{}",
        admin_realm_url(base_url, realm),
        encode_path_segment(user_id),
        encode_path_segment(client_uuid)
    )
}

/// Client roles of `client_uuid` that can still be assigned to `user_id`.
pub async fn list_available_client_roles(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    realm: &str,
    user_id: &str,
    client_uuid: &str,
) -> Result<Vec<Role>> {
    let url = format!(
        "{}/available",
        user_client_mappings_url(base_url, realm, user_id, client_uuid)
    );

    let builder = client.get(&url).bearer_auth(auth_token);
    let response = send_request(
        builder,
        "/admin/realms/{realm}/users/{id}/role-mappings/clients/{client}/available",
        "GET",
    )
    .await?;

    Ok(response.json().await?)
}

/// Assign `roles` of `client_uuid` to `user_id` in a single request.
pub async fn add_client_role_mappings(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    realm: &str,
    user_id: &str,
    client_uuid: &str,
    roles: &[Role],
) -> Result<()> {
    let url = user_client_mappings_url(base_url, realm, user_id, client_uuid);

    let builder = client.post(&url).bearer_auth(auth_token).json(roles);
    send_request(
        builder,
        "/admin/realms/{realm}/users/{id}/role-mappings/clients/{client}",
        "POST",
    )
    .await?;

    Ok(())
}
