pub mod logging;

use crate::config::DEFAULT_API_BASE_URL;
use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_JSON: &str = "json";
pub const ARG_ID: &str = "id";
pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";

fn id_arg() -> Arg {
    Arg::new(ARG_ID).help("User id").required(true)
}

fn name_arg() -> Arg {
    Arg::new(ARG_NAME)
        .short('n')
        .long("name")
        .help("Display name (letters, numbers and spaces)")
        .required(true)
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Email address")
        .required(true)
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("userdesk")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long("api-url")
                .help(format!(
                    "Base URL of the users API [fallback: API_URL, then {DEFAULT_API_BASE_URL}]"
                ))
                .env("USERDESK_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_JSON)
                .long("json")
                .help("Print JSON instead of a table")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("list").about("List all users"))
        .subcommand(Command::new("get").about("Show a single user").arg(id_arg()))
        .subcommand(
            Command::new("add")
                .about("Create a user")
                .arg(name_arg())
                .arg(email_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Replace the name and email of a user")
                .arg(id_arg())
                .arg(name_arg())
                .arg(email_arg()),
        )
        .subcommand(Command::new("delete").about("Delete a user").arg(id_arg()))
        .subcommand(Command::new("health").about("Check that the API is reachable"));

    logging::with_args(command)
}
