//! Reachability check against `GET {base}/test`. This endpoint is not part of
//! the users API, so it bypasses [`crate::ApiClient`].

use crate::config::ClientConfig;
use crate::http::build_url_with_base;
use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use std::io::Write;
use tracing::{Instrument, debug, info_span};

const HEALTH_PATH: &str = "/test";

/// # Errors
/// Returns an error if the API cannot be reached or answers with a non-2xx status.
pub async fn execute<W: Write>(config: &ClientConfig, out: &mut W) -> Result<()> {
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()
        .context("failed to build HTTP client")?;

    let url = build_url_with_base(&config.api_base_url, HEALTH_PATH);

    let span = info_span!("health.check", http.method = "GET", url = %url);
    let response = client
        .get(&url)
        .send()
        .instrument(span)
        .await
        .with_context(|| format!("API at {} is unreachable", config.api_base_url))?;

    let status = response.status();
    debug!("health endpoint answered {}", status);

    if !status.is_success() {
        return Err(anyhow!(
            "API at {} is unhealthy: {}",
            config.api_base_url,
            status
        ));
    }

    writeln!(out, "API at {} is up ({status})", config.api_base_url)?;

    Ok(())
}
