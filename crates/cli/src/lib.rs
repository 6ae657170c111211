//! Keycloak test-environment provisioning tools.
//!
//! Responsibilities:
//! - Define the command lines of `assign-admin-roles` and `delete-client-default-authz`.
//! - Bootstrap each run (dotenv, logging, config, Ctrl+C) and map outcomes to exit codes.
//! - Implement both commands on top of [`keycloak_client::AdminApi`].
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Configuration validation rules (see `crates/config`).
//!
//! Invariants:
//! - `.env` is loaded BEFORE CLI parsing so clap `env` fallbacks can read it.
//! - Exit code is 0 for success, no-op, help/version and Ctrl+C; 255 otherwise.

pub mod args;
pub mod commands;
pub mod error;
pub mod runtime;

pub use error::{ExitCode, ExitCodeExt, ProvisionError};
