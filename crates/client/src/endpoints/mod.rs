//! REST API endpoint implementations.
//!
//! Each function issues exactly one HTTP request and maps the response into
//! models or a [`crate::error::ClientError`]. Session handling lives in
//! [`crate::client`].

mod auth;
mod authz;
mod clients;
mod request;
mod role_mappings;
pub mod url_encoding;
mod users;

pub use auth::request_password_token;
pub use authz::{
    delete_authz_permission, delete_authz_policy, delete_authz_resource, list_authz_permissions,
    list_authz_policies, list_authz_resources,
};
pub use clients::find_clients_by_client_id;
pub use request::send_request;
pub use role_mappings::{add_client_role_mappings, list_available_client_roles};
pub use url_encoding::encode_path_segment;
pub use users::find_users_by_username;

/// `{base_url}/admin/realms/{realm}` with the realm percent-encoded.
pub(crate) fn admin_realm_url(base_url: &str, realm: &str) -> String {
    format!("{}/admin/realms/{}", base_url, encode_path_segment(realm))
}

/// `{admin_realm_url}/clients/{client_uuid}/authz/resource-server`.
pub(crate) fn resource_server_url(base_url: &str, realm: &str, client_uuid: &str) -> String {
    format!(
        "{}/clients/{}/authz/resource-server",
        admin_realm_url(base_url, realm),
        encode_path_segment(client_uuid)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_realm_url() {
        assert_eq!(
            admin_realm_url("http://localhost:8080", "example"),
            "http://localhost:8080/admin/realms/example"
        );
    }

    #[test]
    fn test_resource_server_url_encodes_segments() {
        assert_eq!(
            resource_server_url("http://localhost:8080", "my realm", "c-1"),
            "http://localhost:8080/admin/realms/my%20realm/clients/c-1/authz/resource-server"
        );
    }
}
