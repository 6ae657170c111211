//! Integration tests for Ctrl+C/SIGINT handling.
//!
//! Unix-only because they send SIGINT to the child process.
//! We assert:
//! - exit code is 0
//! - stderr contains the cancellation message

#![cfg(unix)]

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
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

fn send_sigint(pid: u32) {
    // SAFETY: standard Unix kill syscall
    unsafe {
        libc::kill(pid as i32, libc::SIGINT);
    }
}

/// Token endpoint that notifies `seen` and then stalls for a minute.
async fn mount_stalled_token(server: &MockServer, seen: Arc<Notify>) {
    Mock::given(method("POST"))
        .and(path("/realms/master/protocol/openid-connect/token"))
        .respond_with(move |_req: &wiremock::Request| {
            seen.notify_one();
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(60))
                .set_body_json(serde_json::json!({
                    "access_token": "test-token",
                    "expires_in": 60,
                    "token_type": "Bearer"
                }))
        })
        .mount(server)
        .await;
}

async fn interrupt_during_token_request(bin: &std::path::Path, args: &[&str]) {
    let server = MockServer::start().await;
    let request_seen = Arc::new(Notify::new());
    mount_stalled_token(&server, Arc::clone(&request_seen)).await;

    let mut cmd = tokio::process::Command::new(bin);
    cmd.env("DOTENV_DISABLED", "1").env_remove("RUST_LOG");
    for var in KEYCLOAK_ENV_VARS {
        cmd.env_remove(var);
    }
    let child = cmd
        .arg(server.uri())
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn provisioning binary");

    let pid = child.id().expect("child pid");
    tokio::time::timeout(Duration::from_secs(5), request_seen.notified())
        .await
        .expect("expected token request before SIGINT");
    send_sigint(pid);

    let output = tokio::time::timeout(Duration::from_secs(5), child.wait_with_output())
        .await
        .expect("process should exit promptly")
        .expect("wait_with_output ok");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Operation cancelled by user"));
    assert!(!stderr.contains("Error:"));
}

#[tokio::test]
async fn test_assign_ctrl_c_exits_0_with_message() {
    interrupt_during_token_request(
        assert_cmd::cargo::cargo_bin!("assign-admin-roles"),
        &["-r", "manage-realm", "--realm-name", "example", "-u", "user"],
    )
    .await;
}

#[tokio::test]
async fn test_cleaner_ctrl_c_exits_0_with_message() {
    interrupt_during_token_request(
        assert_cmd::cargo::cargo_bin!("delete-client-default-authz"),
        &["--realm-name", "example", "-n", "example_client"],
    )
    .await;
}
