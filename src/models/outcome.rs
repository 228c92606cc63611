//! Per-item and per-batch results of a sorting run.

use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// A successfully relocated (or already placed) video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relocation {
    /// Where the file was.
    pub from: PathBuf,
    /// Where the file is now.
    pub to: PathBuf,
    /// Matched show directory name under the target root.
    pub show_directory: String,
    /// Season number parsed from the title.
    pub season: u32,
    /// Episode number parsed from the title, when it parses.
    pub episode: Option<u32>,
    /// False when the file already sat at its destination.
    pub moved: bool,
}

/// Outcome of processing one video.
#[derive(Debug)]
pub struct ItemOutcome {
    /// Catalog title of the video.
    pub title: String,
    /// Source file path as reported by the catalog.
    pub source: String,
    /// Relocation or the reason it failed.
    pub result: Result<Relocation, Error>,
}

impl ItemOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Serialize)]
struct ItemRecord<'a> {
    title: &'a str,
    source: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    relocation: Option<&'a Relocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for ItemOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let record = match &self.result {
            Ok(relocation) => ItemRecord {
                title: &self.title,
                source: &self.source,
                status: if relocation.moved { "moved" } else { "in_place" },
                relocation: Some(relocation),
                error: None,
            },
            Err(e) => ItemRecord {
                title: &self.title,
                source: &self.source,
                status: "failed",
                relocation: None,
                error: Some(e.to_string()),
            },
        };
        record.serialize(serializer)
    }
}

/// Outcomes of a whole batch, in input order.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    /// True when there was nothing to process.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of items that ended at their destination.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of items that were actually moved.
    pub fn moved(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(r) if r.moved))
            .count()
    }

    /// Number of failed items.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// First error that means the target library was unusable.
    pub fn fatal_error(&self) -> Option<&Error> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err())
            .find(|e| e.is_fatal())
    }

    /// Save the report as JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| Error::io("create directory", parent, e))?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| Error::io("write", path, e))?;
        Ok(())
    }
}
