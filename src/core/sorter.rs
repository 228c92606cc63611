//! Batch sorter.
//!
//! Relocates watched videos one at a time, in input order. A failing item is
//! logged and recorded in the report; it never stops the remaining items.

use crate::core::relocator;
use crate::models::catalog::{Section, Video};
use crate::models::outcome::{BatchReport, ItemOutcome};
use crate::utils::fs::{FileSystem, StdFileSystem};
use chrono::Utc;

/// Sorts videos into a target section.
pub struct Sorter<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    target: &'a Section,
}

impl<'a, F: FileSystem + ?Sized> Sorter<'a, F> {
    /// Create a sorter over a filesystem and target section.
    pub fn new(fs: &'a F, target: &'a Section) -> Self {
        Self { fs, target }
    }

    /// Process every video and report each outcome.
    pub fn run(&self, videos: &[Video]) -> BatchReport {
        self.run_with(videos, |_, _| {})
    }

    /// Process every video, calling `on_item` with the index and outcome of
    /// each item as soon as it is done.
    pub fn run_with<O>(&self, videos: &[Video], mut on_item: O) -> BatchReport
    where
        O: FnMut(usize, &ItemOutcome),
    {
        let started_at = Utc::now();

        if videos.is_empty() {
            tracing::info!("Nothing to do");
            return BatchReport {
                started_at,
                finished_at: Utc::now(),
                outcomes: Vec::new(),
            };
        }

        tracing::info!(
            "Sorting {} videos into {}",
            videos.len(),
            self.target.root_path.display()
        );

        let mut outcomes = Vec::with_capacity(videos.len());
        for (idx, video) in videos.iter().enumerate() {
            let result = relocator::relocate(self.fs, video, self.target);
            if let Err(ref e) = result {
                if e.is_fatal() {
                    tracing::error!("Skipping {}: {}", video.title, e);
                } else {
                    tracing::warn!("Skipping {}: {}", video.title, e);
                }
            }

            let outcome = ItemOutcome {
                title: video.title.clone(),
                source: video.source_file_path.clone(),
                result,
            };
            on_item(idx, &outcome);
            outcomes.push(outcome);
        }

        BatchReport {
            started_at,
            finished_at: Utc::now(),
            outcomes,
        }
    }
}

/// Sort videos into a target section on the local filesystem (convenience function).
pub fn sort_videos(videos: &[Video], target: &Section) -> BatchReport {
    Sorter::new(&StdFileSystem, target).run(videos)
}
