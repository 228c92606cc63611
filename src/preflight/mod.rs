//! Preflight checks module.

mod plex;

use crate::models::config::PlexConfig;
use crate::Result;
use colored::Colorize;

/// Result of a preflight check.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub success: bool,
    pub message: String,
    pub hint: Option<String>,
}

impl CheckResult {
    pub fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            message: message.to_string(),
            hint: None,
        }
    }

    pub fn fail(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }
}

/// Run all preflight checks.
pub async fn run_preflight_checks(config: &PlexConfig) -> Result<Vec<CheckResult>> {
    let mut results = Vec::new();

    results.push(plex::check_token(config));

    // Server check needs a token
    if config.token.is_some() {
        results.push(plex::check_server(config).await);
    }

    Ok(results)
}

/// Print preflight check results.
pub fn print_results(results: &[CheckResult]) {
    for result in results {
        if result.success {
            println!(
                "{} {}: {}",
                "[OK]".green(),
                result.name.bold(),
                result.message
            );
        } else {
            println!(
                "{} {}: {}",
                "[FAIL]".red(),
                result.name.bold(),
                result.message
            );
            if let Some(ref hint) = result.hint {
                println!("  {} {}", "->".yellow(), hint);
            }
        }
    }
}

/// Check if all preflight checks passed.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passed() {
        let results = vec![
            CheckResult::ok("Plex token", "configured"),
            CheckResult::fail("Plex server", "unreachable", "start it"),
        ];
        assert!(!all_passed(&results));
        assert!(all_passed(&results[..1]));
    }

    #[tokio::test]
    async fn test_missing_token_skips_server_check() {
        let config = PlexConfig {
            token: None,
            ..PlexConfig::default()
        };
        let results = run_preflight_checks(&config).await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(!results[0].success);
        assert!(results[0].hint.is_some());
    }
}
