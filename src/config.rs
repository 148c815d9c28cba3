//! Client configuration. The base URL is resolved by the caller (CLI flag,
//! environment or default) and handed to [`crate::ApiClient::new`]; nothing
//! here reads process-wide state.

use crate::APP_USER_AGENT;

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Settings an [`crate::ApiClient`] is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: APP_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Builds a config for `api_base_url`, falling back to the default when the
    /// value is blank.
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        let mut config = Self::default();
        if let Some(value) = normalize_value(api_base_url) {
            config.api_base_url = value;
        }
        config
    }
}

/// Trims a configured value, drops trailing slashes and rejects empty input.
pub fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
