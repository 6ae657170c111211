//! Configuration type definitions for the Keycloak provisioning tools.
//!
//! Responsibilities:
//! - Define the admin authentication settings (password grant credentials).
//! - Define connection settings and the combined `Config`.
//!
//! Does NOT handle:
//! - Loading values from the environment or the command line (see `loader`).
//! - Token acquisition (see the client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
