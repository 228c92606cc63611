//! Catalog records reported by the media server.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A library section (e.g. "Unsorted", "TV Shows").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section key used in catalog URLs.
    pub key: u32,
    /// Display title.
    pub title: String,
    /// Filesystem root of the section.
    pub root_path: PathBuf,
}

/// A video item in a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Title as reported by the catalog (usually the release filename).
    pub title: String,
    /// Number of times the item was played.
    pub view_count: u32,
    /// Path of the media file, in the server's path format.
    pub source_file_path: String,
}

impl Video {
    /// Whether the video has been watched at least once.
    pub fn is_watched(&self) -> bool {
        self.view_count > 0
    }
}

/// Find a section by its exact title.
pub fn find_section_by_title<'a>(sections: &'a [Section], title: &str) -> Result<&'a Section> {
    sections
        .iter()
        .find(|section| section.title == title)
        .ok_or_else(|| crate::Error::SectionNotFound(title.to_string()))
}

/// Keep only watched videos, in their original order.
pub fn watched(videos: Vec<Video>) -> Vec<Video> {
    videos.into_iter().filter(Video::is_watched).collect()
}
