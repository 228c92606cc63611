//! Command line argument definitions.

use crate::models::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Plex Sorter - File watched TV episodes into Show/Season folders
#[derive(Parser, Debug)]
#[command(name = "plex-sorter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Skip preflight checks
    #[arg(long)]
    pub skip_preflight: bool,

    /// API token for Plex (default: PLEX_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Plex server host
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Plex API port
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Title of the Plex section to scan
    #[arg(long, value_name = "TITLE")]
    pub source: Option<String>,

    /// Title of the Plex section to sort files into
    #[arg(long, value_name = "TITLE")]
    pub target: Option<String>,

    /// Write a JSON report of every processed video
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Override configuration values with the ones given on the command line.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(ref token) = self.token {
            config.plex.token = Some(token.clone());
        }
        if let Some(ref host) = self.host {
            config.plex.host = host.clone();
        }
        if let Some(port) = self.port {
            config.plex.port = port;
        }
        if let Some(ref source) = self.source {
            config.sections.source = source.clone();
        }
        if let Some(ref target) = self.target {
            config.sections.target = target.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "plex-sorter",
            "--token",
            "abc",
            "--port",
            "32400",
            "--target",
            "Series",
        ]);
        let config = cli.apply(Config::default());
        assert_eq!(config.plex.token.as_deref(), Some("abc"));
        assert_eq!(config.plex.port, 32400);
        assert_eq!(config.plex.host, "localhost");
        assert_eq!(config.sections.source, "Unsorted");
        assert_eq!(config.sections.target, "Series");
    }

    #[test]
    fn test_report_path() {
        let cli = Cli::parse_from(["plex-sorter", "-d", "--report", "/tmp/report.json"]);
        assert!(cli.debug);
        assert_eq!(cli.report, Some(PathBuf::from("/tmp/report.json")));
    }
}
