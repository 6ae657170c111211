//! Provisioning commands.
//!
//! Each command has an `execute` entry point taking the parsed CLI, and a core
//! function generic over [`keycloak_client::AdminApi`] that holds the control
//! flow. The core functions are exercised against a recording fake in tests.

pub mod assign_roles;
pub mod delete_default_authz;

#[cfg(test)]
pub(crate) mod fake;
