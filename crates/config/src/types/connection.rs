//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (server URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Configuration loading from env/CLI (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` never carries a trailing slash once produced by `ConfigLoader::build`.

use std::time::Duration;

use crate::constants::{DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;

/// Connection configuration for the Keycloak server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Keycloak server (e.g., http://localhost:8080)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Default for Config {
    /// Development defaults: `http://localhost:8080` with `admin`/`admin`
    /// against the `master` realm through `admin-cli`.
    fn default() -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: DEFAULT_SERVER_URL.to_string(),
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Checks if this configuration is using the default development credentials.
    pub fn is_using_default_credentials(&self) -> bool {
        self.auth.is_default_credentials()
    }
}
