//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use keycloak_client::testing::load_fixture;

#[allow(unused_imports)]
pub use keycloak_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use keycloak_client::{AdminCredentials, KeycloakClient};
use keycloak_config::AuthConfig;

/// Default admin credentials (`admin`/`admin` on `master` via `admin-cli`).
#[allow(dead_code)]
pub fn admin_credentials() -> AdminCredentials {
    AdminCredentials::from(&AuthConfig::default())
}

/// Unauthenticated client pointed at `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> KeycloakClient {
    KeycloakClient::builder()
        .base_url(server.uri())
        .credentials(admin_credentials())
        .build()
        .expect("client should build")
}

/// Mount a successful token response for the `master` realm.
#[allow(dead_code)]
pub async fn mount_token(server: &MockServer) {
    Mock::given(wiremock::matchers::method("POST"))
        .and(wiremock::matchers::path(
            "/realms/master/protocol/openid-connect/token",
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/token_success.json")),
        )
        .mount(server)
        .await;
}
