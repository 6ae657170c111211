//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and defaults.
//! - Test environment variable handling and precedence.
//! - Test validation of URL, timeout, and credential fields.
//!
//! Invariants:
//! - Tests touching the environment use `serial_test` and `env_lock()`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable `apply_env` reads, unset, for hermetic `temp_env` scopes.
pub fn cleared_keycloak_env() -> [(&'static str, Option<&'static str>); 8] {
    [
        ("KEYCLOAK_URL", None),
        ("KEYCLOAK_ADMIN", None),
        ("KEYCLOAK_ADMIN_PASSWORD", None),
        ("KEYCLOAK_AUTH_REALM", None),
        ("KEYCLOAK_CLIENT_ID", None),
        ("KEYCLOAK_CLIENT_SECRET", None),
        ("KEYCLOAK_TIMEOUT", None),
        ("KEYCLOAK_SKIP_VERIFY", None),
    ]
}
