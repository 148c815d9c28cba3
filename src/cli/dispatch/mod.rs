//! Maps validated CLI matches to an [`Action`]. Name and email are checked
//! here so an invalid form never reaches the API.

use crate::cli::actions::Action;
use crate::cli::commands::{ARG_EMAIL, ARG_ID, ARG_NAME};
use crate::cli::validate;
use anyhow::{Context, Result, anyhow};

fn required<'a>(matches: &'a clap::ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("missing required argument: {id}"))
}

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if the subcommand is unknown, an argument is missing, or
/// the name or email fails validation.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("no subcommand given"))?;

    let action = match name {
        "list" => Action::List,
        "get" => Action::Get {
            id: required(sub_m, ARG_ID)?.trim().to_string(),
        },
        "add" => Action::Add {
            name: validate::name(required(sub_m, ARG_NAME)?)?,
            email: validate::email(required(sub_m, ARG_EMAIL)?)?,
        },
        "update" => Action::Update {
            id: required(sub_m, ARG_ID)?.trim().to_string(),
            name: validate::name(required(sub_m, ARG_NAME)?)?,
            email: validate::email(required(sub_m, ARG_EMAIL)?)?,
        },
        "delete" => Action::Delete {
            id: required(sub_m, ARG_ID)?.trim().to_string(),
        },
        "health" => Action::Health,
        other => return Err(anyhow!("unknown subcommand: {other}")),
    };

    Ok(action)
}
