//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define both tools' command lines using clap derive macros.
//! - Share the admin connection flags between the tools.
//! - Rewrite the two-letter short flags (`-aR`, `-rN`) accepted by earlier
//!   provisioning scripts into their long forms before clap sees them.
//!
//! Does NOT handle:
//! - Merging flags with `.env`/environment values (see `runtime::build_config`).
//! - Checking that tool-specific required values are present (done by each command,
//!   after its early no-op checks).
//!
//! Invariants:
//! - Optional values stay `None` when absent so the config loader can apply its
//!   environment and default layers.
//! - Every long flag also accepts its underscore spelling (`--realm_name`).

use std::ffi::OsString;

use clap::{Args, Parser};

/// Two-letter short flags and the long flag each one stands for.
const LEGACY_SHORT_FLAGS: &[(&str, &str)] = &[("-aR", "--auth-realm"), ("-rN", "--realm-name")];

/// Admin connection flags shared by both tools.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Keycloak server URL (e.g., http://localhost:8080)
    #[arg(value_name = "AUTH_URL", env = "KEYCLOAK_URL")]
    pub auth_url: Option<String>,

    /// Admin username used to obtain the token [default: admin]
    #[arg(short = 'a', long = "auth-admin", alias = "auth_admin", env = "KEYCLOAK_ADMIN")]
    pub auth_admin: Option<String>,

    /// Admin password [default: admin]
    #[arg(
        short = 'p',
        long = "auth-admin-password",
        alias = "auth_admin_password",
        env = "KEYCLOAK_ADMIN_PASSWORD",
        hide_env_values = true
    )]
    pub auth_admin_password: Option<String>,

    /// Realm the admin authenticates against [default: master]
    #[arg(long = "auth-realm", alias = "auth_realm", env = "KEYCLOAK_AUTH_REALM")]
    pub auth_realm: Option<String>,

    /// Client used for the password grant [default: admin-cli]
    #[arg(short = 'c', long = "client-id", alias = "client_id", env = "KEYCLOAK_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Secret of the grant client, for confidential clients
    #[arg(
        short = 's',
        long = "client-secret",
        alias = "client_secret",
        env = "KEYCLOAK_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub client_secret: Option<String>,

    /// Realm to operate on
    #[arg(long = "realm-name", alias = "realm_name")]
    pub realm_name: Option<String>,

    /// HTTP request timeout in seconds [default: 30, env: KEYCLOAK_TIMEOUT]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification [env: KEYCLOAK_SKIP_VERIFY]
    #[arg(long = "skip-verify", alias = "skip_verify")]
    pub skip_verify: bool,
}

#[derive(Parser, Debug)]
#[command(name = "assign-admin-roles")]
#[command(
    about = "Assign realm-management client roles to a user",
    long_about = "Assign realm-management client roles to a user.\n\nOnly roles that are currently available to the user and named in --roles are assigned. An empty role list is a no-op."
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  assign-admin-roles http://localhost:8080 -a admin -p admin --auth-realm master -c admin-cli -r \"manage-realm,create-client\" --realm-name example -u user\n  assign-admin-roles http://localhost:8080 -aR master -rN example -r manage-users -u user\n"
)]
pub struct AssignRolesCli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Comma-separated role names to assign (e.g., "manage-realm,create-client")
    #[arg(short = 'r', long)]
    pub roles: Option<String>,

    /// Username that receives the roles
    #[arg(short = 'u', long = "admin-user", alias = "admin_user")]
    pub admin_user: Option<String>,
}

#[derive(Parser, Debug)]
#[command(name = "delete-client-default-authz")]
#[command(
    about = "Delete the default authorization resource, policy and permission of a client",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  delete-client-default-authz http://localhost:8080 -a admin -p admin --auth-realm master -c admin-cli -n example_client --realm-name example\n  delete-client-default-authz http://localhost:8080 -aR master -rN example -n example_client\n"
)]
pub struct DeleteDefaultAuthzCli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// clientId of the client to clean up
    #[arg(short = 'n', long = "client-name", alias = "client_name")]
    pub client_name: Option<String>,
}

/// Replace `-aR`/`-rN` tokens with their long flags.
///
/// Only whole tokens are rewritten; values such as a password of `-rN` passed
/// with `--auth-admin-password=-rN` are left alone.
pub fn expand_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            LEGACY_SHORT_FLAGS
                .iter()
                .find(|(short, _)| arg.as_os_str() == *short)
                .map(|(_, long)| OsString::from(*long))
                .unwrap_or(arg)
        })
        .collect()
}

/// Parse `args` (including the program name) after expanding legacy short flags.
pub fn parse_from<C, I, T>(args: I) -> Result<C, clap::Error>
where
    C: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    C::try_parse_from(expand_legacy_flags(args))
}
