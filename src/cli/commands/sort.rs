//! Sort command implementation.
//!
//! Fetches the watched videos of the source section from Plex and files
//! them into the target section's show folders.

use crate::core::sorter::Sorter;
use crate::models::catalog::{self, Section};
use crate::models::config::Config;
use crate::models::outcome::{BatchReport, ItemOutcome};
use crate::services::plex::PlexClient;
use crate::utils::fs::StdFileSystem;
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Sort watched videos from the source section into the target section.
pub async fn sort(config: &Config, report_path: Option<&Path>) -> Result<BatchReport> {
    println!("{}", "[SORT] Sorting watched videos...".bold().cyan());
    println!();

    let client = PlexClient::new(&config.plex)?;
    let sections = client.list_sections().await?;

    let source = catalog::find_section_by_title(&sections, &config.sections.source)?;
    log_section("source", source);
    let target = catalog::find_section_by_title(&sections, &config.sections.target)?;
    log_section("target", target);

    let videos = client.list_videos(source.key).await?;
    let watched = catalog::watched(videos);
    tracing::debug!("Watched videos: {}", watched.len());

    println!("  {} {}", "Source:".bold(), source.root_path.display());
    println!("  {} {}", "Target:".bold(), target.root_path.display());
    println!("  {} {}", "Watched:".bold(), watched.len());
    println!();

    let pb = ProgressBar::new(watched.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("=>-"));
    }

    let report = Sorter::new(&StdFileSystem, target).run_with(&watched, |_, outcome| {
        pb.set_message(outcome.title.clone());
        pb.inc(1);
        pb.println(format_outcome(outcome));
    });
    pb.finish_and_clear();

    print_summary(&report);

    if let Some(path) = report_path {
        report.save(path)?;
        println!(
            "{} {}",
            "[OK] Report saved to:".bold().green(),
            path.display()
        );
    }

    Ok(report)
}

fn log_section(role: &str, section: &Section) {
    tracing::debug!(
        "Found {} section: title={} location={} key={}",
        role,
        section.title,
        section.root_path.display(),
        section.key
    );
}

/// One line per processed video.
fn format_outcome(outcome: &ItemOutcome) -> String {
    match &outcome.result {
        Ok(r) if r.moved => format!(
            "{} {} -> {}",
            "[MOVED]".green(),
            r.from.display(),
            r.to.display()
        ),
        Ok(r) => format!("{} {}", "[IN PLACE]".blue(), r.to.display()),
        Err(e) => format!("{} {}: {}", "[FAILED]".red(), outcome.title, e),
    }
}

fn print_summary(report: &BatchReport) {
    if report.is_empty() {
        println!("{}", "[OK] Nothing to do".green());
        return;
    }

    println!();
    println!("{}", "[Sort Summary]".bold().green());
    println!("  {} {}", "Moved:".bold(), report.moved());
    println!(
        "  {} {}",
        "Already in place:".bold(),
        report.succeeded() - report.moved()
    );
    println!("  {} {}", "Failed:".bold(), report.failed());
    println!();
}
