//! `assign-admin-roles`: grant realm-management client roles to a user.

use keycloak_provision::args::AssignRolesCli;
use keycloak_provision::commands::assign_roles;
use keycloak_provision::runtime::run_main;

#[tokio::main]
async fn main() {
    let exit_code = run_main::<AssignRolesCli, _, _>(assign_roles::execute).await;
    std::process::exit(exit_code.as_i32());
}
