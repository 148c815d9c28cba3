//! User subcommands: call the client, turn a `Failure` into an error and
//! render the result.

use crate::cli::globals::OutputFormat;
use crate::users::{ApiClient, ApiResult, User};
use anyhow::{Result, anyhow};
use std::io::Write;
use tracing::info;

fn into_anyhow<T>(result: ApiResult<T>) -> Result<T> {
    result.into_result().map_err(|message| anyhow!(message))
}

/// # Errors
/// Returns an error if the list cannot be fetched or written.
pub async fn list<W: Write>(client: &ApiClient, output: OutputFormat, out: &mut W) -> Result<()> {
    let users = into_anyhow(client.fetch_users().await)?;
    info!(count = users.len(), "fetched users");

    match output {
        OutputFormat::Table => out.write_all(render_table(&users).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&users)?)?,
    }

    Ok(())
}

/// # Errors
/// Returns an error if the user cannot be fetched or written.
pub async fn get<W: Write>(
    client: &ApiClient,
    id: &str,
    output: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let user = into_anyhow(client.get_user_by_id(id).await)?;

    match (user, output) {
        (Some(user), OutputFormat::Table) => {
            out.write_all(render_table(std::slice::from_ref(&user)).as_bytes())?;
        }
        (user, OutputFormat::Json) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&user)?)?;
        }
        (None, OutputFormat::Table) => writeln!(out, "No user found.")?,
    }

    Ok(())
}

/// # Errors
/// Returns the server's message (or the default) if the user is not created.
pub async fn add<W: Write>(client: &ApiClient, name: &str, email: &str, out: &mut W) -> Result<()> {
    into_anyhow(client.add_user(name, email).await)?;
    info!(name, email, "user added");
    writeln!(out, "User added successfully!")?;
    Ok(())
}

/// # Errors
/// Returns the server's message (or the default) if the user is not updated.
pub async fn update<W: Write>(
    client: &ApiClient,
    id: &str,
    name: &str,
    email: &str,
    out: &mut W,
) -> Result<()> {
    into_anyhow(client.update_user(id, name, email).await)?;
    info!(id, "user updated");
    writeln!(out, "User updated successfully!")?;
    Ok(())
}

/// # Errors
/// Returns the server's message (or the default) if the user is not deleted.
pub async fn delete<W: Write>(client: &ApiClient, id: &str, out: &mut W) -> Result<()> {
    into_anyhow(client.delete_user(id).await)?;
    info!(id, "user deleted");
    writeln!(out, "User deleted successfully!")?;
    Ok(())
}

/// Renders users as a left-aligned `ID  NAME  EMAIL` table.
#[must_use]
pub fn render_table(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let id_width = users
        .iter()
        .map(|user| user.id.chars().count())
        .fold("ID".len(), usize::max);
    let name_width = users
        .iter()
        .map(|user| user.name.chars().count())
        .fold("NAME".len(), usize::max);

    let mut table = format!("{:<id_width$}  {:<name_width$}  EMAIL\n", "ID", "NAME");
    for user in users {
        table.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {}\n",
            user.id, user.name, user.email
        ));
    }
    table
}
