//! Plex API client.
//!
//! Only the two library listings the sorter needs are implemented:
//! - `GET /library/sections` for section titles and root paths
//! - `GET /library/sections/{key}/all` for the videos in a section
//!
//! Plex answers both with XML `MediaContainer` documents.

use crate::models::catalog::{Section, Video};
use crate::models::config::PlexConfig;
use crate::Result;
use serde::Deserialize;
use std::path::PathBuf;

const TOKEN_HEADER: &str = "X-Plex-Token";

/// `/library/sections` response.
#[derive(Debug, Deserialize)]
struct SectionsContainer {
    #[serde(rename = "Directory", default)]
    directories: Vec<DirectoryElement>,
}

#[derive(Debug, Deserialize)]
struct DirectoryElement {
    #[serde(rename = "@key")]
    key: u32,
    #[serde(rename = "@title")]
    title: String,
    #[serde(rename = "Location", default)]
    locations: Vec<LocationElement>,
}

#[derive(Debug, Deserialize)]
struct LocationElement {
    #[serde(rename = "@path")]
    path: String,
}

/// `/library/sections/{key}/all` response.
#[derive(Debug, Deserialize)]
struct VideosContainer {
    #[serde(rename = "Video", default)]
    videos: Vec<VideoElement>,
}

#[derive(Debug, Deserialize)]
struct VideoElement {
    #[serde(rename = "@title")]
    title: String,
    #[serde(rename = "@viewCount", default)]
    view_count: u32,
    #[serde(rename = "Media", default)]
    media: Vec<MediaElement>,
}

#[derive(Debug, Deserialize)]
struct MediaElement {
    #[serde(rename = "Part", default)]
    parts: Vec<PartElement>,
}

#[derive(Debug, Deserialize)]
struct PartElement {
    #[serde(rename = "@file")]
    file: String,
}

/// Parse a `/library/sections` XML document.
///
/// Sections without a `Location` have no root path and are skipped.
pub fn parse_sections(xml: &str) -> Result<Vec<Section>> {
    let container: SectionsContainer = quick_xml::de::from_str(xml)?;

    let sections = container
        .directories
        .into_iter()
        .filter_map(|dir| {
            let Some(location) = dir.locations.into_iter().next() else {
                tracing::debug!("Section '{}' has no location, skipping", dir.title);
                return None;
            };
            Some(Section {
                key: dir.key,
                title: dir.title,
                root_path: PathBuf::from(location.path),
            })
        })
        .collect();

    Ok(sections)
}

/// Parse a `/library/sections/{key}/all` XML document.
///
/// Videos without a media part have no file to move and are skipped.
pub fn parse_videos(xml: &str) -> Result<Vec<Video>> {
    let container: VideosContainer = quick_xml::de::from_str(xml)?;

    let videos = container
        .videos
        .into_iter()
        .filter_map(|video| {
            let file = video
                .media
                .into_iter()
                .flat_map(|media| media.parts)
                .map(|part| part.file)
                .next();
            let Some(file) = file else {
                tracing::debug!("Video '{}' has no media part, skipping", video.title);
                return None;
            };
            Some(Video {
                title: video.title,
                view_count: video.view_count,
                source_file_path: file,
            })
        })
        .collect();

    Ok(videos)
}

/// Plex API client.
pub struct PlexClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl PlexClient {
    /// Create a client from configuration. Fails when no token is configured.
    pub fn new(config: &PlexConfig) -> Result<Self> {
        let token = config.token.clone().ok_or(crate::Error::PlexTokenMissing)?;
        Self::with_base_url(&config.base_url(), &token, config.timeout)
    }

    /// Create a client for an explicit base URL.
    pub fn with_base_url(base_url: &str, token: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        })
    }

    /// Fetch an XML document from the API.
    async fn get_xml(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(crate::Error::other(format!(
                "Plex request {} failed with status: {}",
                path,
                resp.status()
            )));
        }

        Ok(resp.text().await?)
    }

    /// Check if the Plex server is reachable.
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/identity", self.base_url);
        match self.client.get(&url).header(TOKEN_HEADER, &self.token).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// List library sections.
    pub async fn list_sections(&self) -> Result<Vec<Section>> {
        let body = self.get_xml("/library/sections").await?;
        parse_sections(&body)
    }

    /// List all videos in a section.
    pub async fn list_videos(&self, section_key: u32) -> Result<Vec<Video>> {
        let body = self
            .get_xml(&format!("/library/sections/{}/all", section_key))
            .await?;
        parse_videos(&body)
    }
}
