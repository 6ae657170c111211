//! OIDC token endpoint.

use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::auth::AdminCredentials;
use crate::endpoints::encode_path_segment;
use crate::endpoints::request::error_message;
use crate::error::{ClientError, Result};
use crate::models::TokenResponse;

/// Obtain an admin token with the resource-owner password grant.
///
/// `client_secret` is only sent when configured. A 400/401 from the token
/// endpoint means the credentials were rejected and maps to
/// [`ClientError::AuthFailed`].
pub async fn request_password_token(
    client: &Client,
    base_url: &str,
    credentials: &AdminCredentials,
) -> Result<TokenResponse> {
    debug!(
        realm = %credentials.realm,
        client_id = %credentials.client_id,
        "Requesting admin token for {}",
        credentials.username
    );

    let url = format!(
        "{}/realms/{}/protocol/openid-connect/token",
        base_url,
        encode_path_segment(&credentials.realm)
    );

    let mut form: Vec<(&str, &str)> = vec![
        ("grant_type", "password"),
        ("client_id", credentials.client_id.as_str()),
        ("username", credentials.username.as_str()),
        ("password", credentials.password.expose_secret()),
    ];
    if let Some(secret) = &credentials.client_secret {
        form.push(("client_secret", secret.expose_secret()));
    }

    let response = client.post(&url).form(&form).send().await?;
    let status = response.status().as_u16();

    if matches!(status, 400 | 401) {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::AuthFailed(error_message(&body)));
    }
    if !response.status().is_success() {
        return Err(super::request::api_error(response).await);
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse token response: {}", e)))
}
