//! User lookup endpoints.

use reqwest::Client;

use crate::endpoints::{admin_realm_url, send_request};
use crate::error::Result;
use crate::models::User;

/// Search users by exact username.
pub async fn find_users_by_username(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    realm: &str,
    username: &str,
) -> Result<Vec<User>> {
    let url = format!("{}/users", admin_realm_url(base_url, realm));

    let builder = client
        .get(&url)
        .bearer_auth(auth_token)
        .query(&[("username", username), ("exact", "true")]);
    let response = send_request(builder, "/admin/realms/{realm}/users", "GET").await?;

    Ok(response.json().await?)
}
