//! Authorization-services endpoints of a client's resource server.

use reqwest::{Client, StatusCode};

use crate::endpoints::{encode_path_segment, resource_server_url, send_request};
use crate::error::{ClientError, Result};
use crate::models::{AuthzPermission, AuthzPolicy, AuthzResource};

/// List the authorization resources of a client.
pub async fn list_authz_resources(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    realm: &str,
    client_uuid: &str,
) -> Result<Vec<AuthzResource>> {
    let url = format!("{}/resource", resource_server_url(base_url, realm, client_uuid));

    let builder = client.get(&url).bearer_auth(auth_token);
    let response = send_request(builder, "/authz/resource-server/resource", "GET").await?;

    Ok(response.json().await?)
}

/// Delete an authorization resource by its `_id`.
pub async fn delete_authz_resource(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    realm: &str,
    client_uuid: &str,
    resource_id: &str,
) -> Result<()> {
    let url = format!(
        "{}/resource/{}",
        resource_server_url(base_url, realm, client_uuid),
        encode_path_segment(resource_id)
    );

    let builder = client.delete(&url).bearer_auth(auth_token);
    send_request(builder, "/authz/resource-server/resource/{id}", "DELETE").await?;

    Ok(())
}

/// List the authorization policies of a client, excluding permissions.
pub async fn list_authz_policies(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    realm: &str,
    client_uuid: &str,
) -> Result<Vec<AuthzPolicy>> {
    let url = format!("{}/policy", resource_server_url(base_url, realm, client_uuid));

    let builder = client
        .get(&url)
        .bearer_auth(auth_token)
        .query(&[("permission", "false")]);
    let response = send_request(builder, "/authz/resource-server/policy", "GET").await?;

    Ok(response.json().await?)
}

/// Delete an authorization policy by id.
pub async fn delete_authz_policy(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    realm: &str,
    client_uuid: &str,
    policy_id: &str,
) -> Result<()> {
    let url = format!(
        "{}/policy/{}",
        resource_server_url(base_url, realm, client_uuid),
        encode_path_segment(policy_id)
    );

    let builder = client.delete(&url).bearer_auth(auth_token);
    send_request(builder, "/authz/resource-server/policy/{id}", "DELETE").await?;

    Ok(())
}

/// List the authorization permissions of a client.
pub async fn list_authz_permissions(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    realm: &str,
    client_uuid: &str,
) -> Result<Vec<AuthzPermission>> {
    let url = format!("{}/permission", resource_server_url(base_url, realm, client_uuid));

    let builder = client.get(&url).bearer_auth(auth_token);
    let response = send_request(builder, "/authz/resource-server/permission", "GET").await?;

    Ok(response.json().await?)
}

/// Delete a resource-based permission by id.
///
/// Keycloak answers this endpoint with `204 No Content`; any other status,
/// including other 2xx codes, is reported as [`ClientError::UnexpectedStatus`]
/// carrying the response body.
pub async fn delete_authz_permission(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    realm: &str,
    client_uuid: &str,
    permission_id: &str,
) -> Result<()> {
    let url = format!(
        "{}/permission/resource/{}",
        resource_server_url(base_url, realm, client_uuid),
        encode_path_segment(permission_id)
    );

    tracing::debug!(
        method = "DELETE",
        endpoint = "/authz/resource-server/permission/resource/{id}",
        "Sending admin API request"
    );
    let response = client.delete(&url).bearer_auth(auth_token).send().await?;
    let status = response.status();

    if status == StatusCode::NO_CONTENT {
        return Ok(());
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::UnexpectedStatus {
        expected: StatusCode::NO_CONTENT.as_u16(),
        status: status.as_u16(),
        url,
        body,
    })
}
