//! CLI exit codes and provisioning errors.
//!
//! Responsibilities:
//! - Define the two process exit statuses the tools report.
//! - Define the domain failures raised by the commands.
//! - Map any `anyhow::Error` chain to an exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see `runtime`).
//!
//! Invariants:
//! - Success, a skipped no-op, and user interruption all exit 0.
//! - Every handled failure exits 255.

use thiserror::Error;

/// Exit statuses of the provisioning tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed, or had nothing to do.
    Success,

    /// Usage error, missing value, lookup failure, or server/transport error.
    Failure,

    /// Interrupted by Ctrl+C.
    Interrupted,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        match self {
            ExitCode::Success | ExitCode::Interrupted => 0,
            ExitCode::Failure => 255,
        }
    }
}

/// Domain failures of the provisioning commands.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// A value the command needs was not supplied.
    #[error("{flag} is required (see --help)")]
    MissingArgument { flag: &'static str },

    #[error("user not found: '{username}' in realm '{realm}'")]
    UserNotFound { realm: String, username: String },

    #[error("client not found: '{client_id}' in realm '{realm}'")]
    ClientNotFound { realm: String, client_id: String },

    /// The permission delete endpoint answered anything but 204.
    #[error("Failed to delete {client_uuid} default permission: {body}")]
    DefaultPermissionDelete { client_uuid: String, body: String },

    /// Ctrl+C arrived while the command was running.
    #[error("cancelled")]
    Cancelled,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;

    /// True if the chain contains [`ProvisionError::Cancelled`].
    fn is_cancelled(&self) -> bool;

    /// True if the chain contains [`ProvisionError::MissingArgument`].
    fn is_usage_error(&self) -> bool;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self.is_cancelled() {
            ExitCode::Interrupted
        } else {
            ExitCode::Failure
        }
    }

    fn is_cancelled(&self) -> bool {
        self.chain().any(|cause| {
            matches!(
                cause.downcast_ref::<ProvisionError>(),
                Some(ProvisionError::Cancelled)
            )
        })
    }

    fn is_usage_error(&self) -> bool {
        self.chain().any(|cause| {
            matches!(
                cause.downcast_ref::<ProvisionError>(),
                Some(ProvisionError::MissingArgument { .. })
            )
        })
    }
}
