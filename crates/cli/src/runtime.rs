//! Process bootstrap shared by both binaries.
//!
//! Responsibilities:
//! - Load `.env` before argument parsing so clap `env` fallbacks can see it.
//! - Parse arguments and map help/version/usage outcomes to exit codes.
//! - Install the stderr tracing subscriber.
//! - Merge CLI flags over the environment into a validated [`Config`].
//! - Race the command against Ctrl+C and report the outcome.
//! - Follow a missing required value with the usage line.
//!
//! Does NOT handle:
//! - Command logic (see `commands`).
//!
//! Invariants:
//! - stdout is never written by the runtime; diagnostics go to stderr.
//! - Exactly one exit code is produced per run.

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use keycloak_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::{ConnectionArgs, parse_from};
use crate::error::{ExitCode, ExitCodeExt, ProvisionError};

/// Log filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run a provisioning command to completion and return its exit code.
///
/// `command` receives the parsed arguments; any error it returns is printed
/// as `Error: {chain}`.
pub async fn run_main<C, F, Fut>(command: F) -> ExitCode
where
    C: Parser,
    F: FnOnce(C) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Error: {}", e);
        return ExitCode::Failure;
    }

    let cli = match parse_from::<C, _, _>(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e),
    };

    init_logging();

    let outcome = tokio::select! {
        result = command(cli) => result,
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => Err(ProvisionError::Cancelled.into()),
            Err(e) => Err(anyhow::Error::new(e).context("Failed to listen for Ctrl+C")),
        },
    };

    match outcome {
        Ok(()) => ExitCode::Success,
        Err(e) if e.is_cancelled() => {
            eprintln!("^C\nOperation cancelled by user");
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if e.is_usage_error() {
                eprintln!("\n{}", C::command().render_usage());
                eprintln!("For more information, try '--help'.");
            }
            e.exit_code()
        }
    }
}

/// Print a clap outcome and classify it.
///
/// `--help` and `--version` are successful runs; everything else is a usage error.
fn report_parse_error(err: &clap::Error) -> ExitCode {
    let code = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
        _ => ExitCode::Failure,
    };
    if let Err(io) = err.print() {
        eprintln!("Error: failed to print usage: {}", io);
    }
    code
}

/// Install the stderr subscriber (`RUST_LOG` overrides the `warn` default).
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the admin connection config: CLI flags over environment over defaults.
///
/// Blank flag values are ignored so the environment or default still applies.
pub fn build_config(args: &ConnectionArgs) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(url) = non_blank(&args.auth_url) {
        loader = loader.with_base_url(url);
    }
    if let Some(username) = non_blank(&args.auth_admin) {
        loader = loader.with_username(username);
    }
    if let Some(password) = non_blank(&args.auth_admin_password) {
        loader = loader.with_password(password);
    }
    if let Some(realm) = non_blank(&args.auth_realm) {
        loader = loader.with_auth_realm(realm);
    }
    if let Some(client_id) = non_blank(&args.client_id) {
        loader = loader.with_client_id(client_id);
    }
    if let Some(secret) = non_blank(&args.client_secret) {
        loader = loader.with_client_secret(secret);
    }
    if let Some(timeout_secs) = args.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if args.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    let config = loader.build().context("Failed to build configuration")?;

    if config.is_using_default_credentials() {
        tracing::warn!(
            "Using default Keycloak admin credentials (admin/admin). \
             These are for local test servers only."
        );
    }

    Ok(config)
}

/// Required string argument, or [`ProvisionError::MissingArgument`] naming `flag`.
pub fn require<'a>(value: &'a Option<String>, flag: &'static str) -> Result<&'a str, ProvisionError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ProvisionError::MissingArgument { flag })
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
