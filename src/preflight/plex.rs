//! Plex server preflight checks.

use super::CheckResult;
use crate::models::config::PlexConfig;
use crate::services::plex::PlexClient;

/// Check that a Plex token is configured.
pub fn check_token(config: &PlexConfig) -> CheckResult {
    match config.token {
        Some(_) => CheckResult::ok("Plex token", "configured"),
        None => CheckResult::fail(
            "Plex token",
            "not configured",
            "Pass --token or set PLEX_TOKEN environment variable",
        ),
    }
}

/// Check if the Plex server is reachable.
pub async fn check_server(config: &PlexConfig) -> CheckResult {
    let name = "Plex server";
    let client = match PlexClient::new(config) {
        Ok(client) => client,
        Err(e) => return CheckResult::fail(name, &e.to_string(), "Check your Plex configuration"),
    };

    match client.health_check().await {
        Ok(true) => CheckResult::ok(name, &format!("connected to {}", config.base_url())),
        _ => CheckResult::fail(
            name,
            &format!("unable to reach {}", config.base_url()),
            "Check --host/--port and that Plex Media Server is running",
        ),
    }
}
