//! `delete-client-default-authz`: remove a client's default authorization objects.

use keycloak_provision::args::DeleteDefaultAuthzCli;
use keycloak_provision::commands::delete_default_authz;
use keycloak_provision::runtime::run_main;

#[tokio::main]
async fn main() {
    let exit_code = run_main::<DeleteDefaultAuthzCli, _, _>(delete_default_authz::execute).await;
    std::process::exit(exit_code.as_i32());
}
