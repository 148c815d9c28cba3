use crate::cli::commands::{ARG_API_URL, ARG_JSON};
use crate::config::{ClientConfig, DEFAULT_API_BASE_URL, normalize_value};
use std::env;

/// Environment variable read when neither `--api-url` nor `USERDESK_API_URL`
/// is set.
pub const FALLBACK_API_URL_ENV: &str = "API_URL";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Arguments shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub output: OutputFormat,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            output: OutputFormat::Table,
        }
    }

    #[must_use]
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        let api_url = matches
            .get_one::<String>(ARG_API_URL)
            .and_then(|value| normalize_value(value))
            .or_else(|| {
                env::var(FALLBACK_API_URL_ENV)
                    .ok()
                    .and_then(|value| normalize_value(&value))
            })
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let mut globals = Self::new(api_url);
        if matches.get_flag(ARG_JSON) {
            globals.output = OutputFormat::Json;
        }
        globals
    }

    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url)
    }
}
