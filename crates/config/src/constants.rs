//! Centralized constants for the Keycloak provisioning workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication between the loader, the client builder, and the CLI.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Keycloak server URL used in help text and examples.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed HTTP request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Admin Authentication Defaults
// =============================================================================

/// Default admin username on a freshly provisioned test server.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Default admin password on a freshly provisioned test server.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Realm the admin user authenticates against.
pub const DEFAULT_AUTH_REALM: &str = "master";

/// Public client used for the admin password grant.
pub const DEFAULT_ADMIN_CLIENT_ID: &str = "admin-cli";

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_URL: &str = "KEYCLOAK_URL";
pub const ENV_ADMIN: &str = "KEYCLOAK_ADMIN";
pub const ENV_ADMIN_PASSWORD: &str = "KEYCLOAK_ADMIN_PASSWORD";
pub const ENV_AUTH_REALM: &str = "KEYCLOAK_AUTH_REALM";
pub const ENV_CLIENT_ID: &str = "KEYCLOAK_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "KEYCLOAK_CLIENT_SECRET";
pub const ENV_TIMEOUT: &str = "KEYCLOAK_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "KEYCLOAK_SKIP_VERIFY";

/// Setting this to `1` or `true` prevents `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
