use crate::cli::{
    actions::{Action, health, users},
    globals::GlobalArgs,
};
use crate::users::ApiClient;
use anyhow::Result;
use std::io::Write;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
// To add a new action, add a new `Action::*` variant and a corresponding call here.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute<W: Write>(action: Action, globals: &GlobalArgs, out: &mut W) -> Result<()> {
    let config = globals.client_config();
    let client = || ApiClient::new(&config);

    match action {
        Action::List => users::list(&client()?, globals.output, out).await,
        Action::Get { id } => users::get(&client()?, &id, globals.output, out).await,
        Action::Add { name, email } => users::add(&client()?, &name, &email, out).await,
        Action::Update { id, name, email } => {
            users::update(&client()?, &id, &name, &email, out).await
        }
        Action::Delete { id } => users::delete(&client()?, &id, out).await,
        Action::Health => health::execute(&config, out).await,
    }
}
