//! Filename parser module.
//!
//! Extracts the show name and season/episode numbering from release-style
//! filenames such as `doctor.who.2005.s01e02.720p.mkv`.
//!
//! Markers are tried in a fixed order and the first pattern that matches wins:
//! - `s01e02` (lowercase)
//! - `S01E02` (uppercase)
//! - `01x02`

use crate::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Season/episode marker patterns, in priority order.
///
/// Each pattern swallows one separator in front of the marker so the show
/// name ends where the marker begins.
const MARKER_PATTERNS: &[&str] = &[
    r"[._ -]?s(\d+)e(\d+)",
    r"[._ -]?S(\d+)E(\d+)",
    r"[._ -]?(\d+)x(\d+)",
];

static MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    MARKER_PATTERNS
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

/// Parsed filename information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFilename {
    /// Everything before the season/episode marker.
    pub show_name: String,
    /// Season number.
    pub season: u32,
    /// Episode number.
    pub episode: u32,
}

/// Location and numbering of the first matching marker.
struct Marker<'a> {
    start: usize,
    season: &'a str,
    episode: &'a str,
}

fn find_marker(filename: &str) -> Result<Marker<'_>> {
    for re in MARKERS.iter() {
        if let Some(caps) = re.captures(filename) {
            if let (Some(whole), Some(season), Some(episode)) = (caps.get(0), caps.get(1), caps.get(2)) {
                return Ok(Marker {
                    start: whole.start(),
                    season: season.as_str(),
                    episode: episode.as_str(),
                });
            }
        }
    }

    Err(crate::Error::NotFound(filename.to_string()))
}

fn parse_number(digits: &str, filename: &str) -> Result<u32> {
    digits
        .parse()
        .map_err(|_| crate::Error::NotFound(filename.to_string()))
}

/// Extract the season number from a filename.
///
/// Leading zeros are dropped (`s01e02` gives `1`).
pub fn extract_season(filename: &str) -> Result<u32> {
    let marker = find_marker(filename)?;
    parse_number(marker.season, filename)
}

/// Extract the episode number from a filename.
pub fn extract_episode(filename: &str) -> Result<u32> {
    let marker = find_marker(filename)?;
    parse_number(marker.episode, filename)
}

/// Extract the show name, i.e. the part of the filename before the marker.
pub fn extract_show_name(filename: &str) -> Result<String> {
    let marker = find_marker(filename)?;
    Ok(filename[..marker.start].to_string())
}

/// Parse show name, season and episode in one pass.
pub fn parse_filename(filename: &str) -> Result<ParsedFilename> {
    let marker = find_marker(filename)?;
    Ok(ParsedFilename {
        show_name: filename[..marker.start].to_string(),
        season: parse_number(marker.season, filename)?,
        episode: parse_number(marker.episode, filename)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_season_all_patterns() {
        assert_eq!(extract_season("egg.bacon.s01e02.some.title").unwrap(), 1);
        assert_eq!(extract_season("egg.bacon.S01E02.some.title").unwrap(), 1);
        assert_eq!(extract_season("egg.bacon.01x02.some.title").unwrap(), 1);
    }

    #[test]
    fn test_extract_season_strips_leading_zeros() {
        assert_eq!(extract_season("show.s0012e01").unwrap(), 12);
        assert_eq!(extract_season("show.s00e01").unwrap(), 0);
    }

    #[test]
    fn test_lowercase_pattern_wins_over_later_patterns() {
        // Both the lowercase and the NxM marker are present.
        assert_eq!(extract_season("show.3x04.s02e01").unwrap(), 2);
        assert_eq!(extract_show_name("show.3x04.s02e01").unwrap(), "show.3x04");
    }

    #[test]
    fn test_multi_episode_marker() {
        assert_eq!(extract_season("doctor.who.2005.s01e02e03").unwrap(), 1);
        assert_eq!(extract_episode("doctor.who.2005.s01e02e03").unwrap(), 2);
        assert_eq!(
            extract_show_name("doctor.who.2005.s01e02e03").unwrap(),
            "doctor.who.2005"
        );
    }

    #[test]
    fn test_no_marker_is_not_found() {
        assert!(matches!(
            extract_season("some.movie.2010.1080p"),
            Err(crate::Error::NotFound(_))
        ));
        assert!(matches!(
            extract_show_name("some.movie.2010.1080p"),
            Err(crate::Error::NotFound(_))
        ));
    }

    #[test]
    fn test_overflowing_season_is_not_found() {
        assert!(matches!(
            extract_season("show.s99999999999e01"),
            Err(crate::Error::NotFound(_))
        ));
    }

    #[test]
    fn test_parse_filename() {
        let parsed = parse_filename("egg.bacon.S03E11.some.title.mkv").unwrap();
        assert_eq!(
            parsed,
            ParsedFilename {
                show_name: "egg.bacon".to_string(),
                season: 3,
                episode: 11,
            }
        );
    }
}
