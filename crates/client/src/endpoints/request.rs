//! Request execution and error mapping shared by all endpoints.
//!
//! Requests are sent once: no retry or backoff is applied.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::KeycloakErrorBody;

/// Send a request and turn any non-2xx answer into [`ClientError::ApiError`].
///
/// `endpoint` and `method` are used for logging only.
pub async fn send_request(builder: RequestBuilder, endpoint: &str, method: &str) -> Result<Response> {
    debug!(method, endpoint, "Sending admin API request");

    let response = builder.send().await?;
    let status = response.status();
    debug!(method, endpoint, status = status.as_u16(), "Admin API responded");

    if status.is_success() {
        Ok(response)
    } else {
        Err(api_error(response).await)
    }
}

/// Build an [`ClientError::ApiError`] from a failed response.
///
/// Keycloak error payloads are reduced to their message; other bodies are kept verbatim.
pub(crate) async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    ClientError::ApiError {
        status,
        url,
        message: error_message(&body),
    }
}

pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<KeycloakErrorBody>(body)
        .ok()
        .and_then(|b| b.message())
        .unwrap_or_else(|| body.to_string())
}
