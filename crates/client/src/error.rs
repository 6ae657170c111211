//! Error types for the Keycloak client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Keycloak client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The token endpoint rejected the admin credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// An admin call was attempted before a token was obtained.
    #[error("Not authenticated: call authenticate() before using the admin API")]
    NotAuthenticated,

    /// HTTP transport error (connection refused, timeout, unreadable body, ...).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the admin API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The server answered with a status other than the one the call requires.
    #[error("unexpected status {status} from {url} (expected {expected}): {body}")]
    UnexpectedStatus {
        expected: u16,
        status: u16,
        url: String,
        body: String,
    },

    /// Invalid response format from the server.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
