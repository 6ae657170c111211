//! Shared test utilities for the provisioning binaries.
//!
//! Responsibilities:
//! - Provide hermetic command factories that prevent dotenv loading.
//! - Mount the token endpoint shared by every successful run.
//!
//! Invariants / Assumptions:
//! - No `KEYCLOAK_*` variable leaks in from the host environment.
//! - Logging is left at its default level so stderr carries only warnings and errors.

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEYCLOAK_ENV_VARS: &[&str] = &[
    "KEYCLOAK_URL",
    "KEYCLOAK_ADMIN",
    "KEYCLOAK_ADMIN_PASSWORD",
    "KEYCLOAK_AUTH_REALM",
    "KEYCLOAK_CLIENT_ID",
    "KEYCLOAK_CLIENT_SECRET",
    "KEYCLOAK_TIMEOUT",
    "KEYCLOAK_SKIP_VERIFY",
];

fn hermetic(mut cmd: Command) -> Command {
    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");
    for var in KEYCLOAK_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Hermetic `assign-admin-roles` command.
#[allow(dead_code)]
pub fn assign_cmd() -> Command {
    hermetic(assert_cmd::cargo::cargo_bin_cmd!("assign-admin-roles"))
}

/// Hermetic `delete-client-default-authz` command.
#[allow(dead_code)]
pub fn cleaner_cmd() -> Command {
    hermetic(assert_cmd::cargo::cargo_bin_cmd!("delete-client-default-authz"))
}

/// Mount a successful password grant on the `master` realm.
#[allow(dead_code)]
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/realms/master/protocol/openid-connect/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "test-token",
            "expires_in": 60,
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;
}

/// Mount `GET clients?clientId={client_id}` answering with one client of id `uuid`.
#[allow(dead_code)]
pub async fn mount_client(server: &MockServer, realm: &str, client_id: &str, uuid: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/admin/realms/{realm}/clients")))
        .and(wiremock::matchers::query_param("clientId", client_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": uuid, "clientId": client_id}
        ])))
        .mount(server)
        .await;
}
