//! Show directory matcher.
//!
//! Scores every show directory under a library root against the show name
//! parsed from a release filename. The score is the number of
//! whitespace-separated directory tokens that also appear among the
//! dot-separated tokens of the show name, compared case-insensitively:
//!
//! ```text
//! "Doctor Who 2005"  vs  "doctor.who.2005.s01e02"  ->  3
//! "Red Dwarf"        vs  "doctor.who.2005.s01e02"  ->  0 (discarded)
//! ```

use crate::core::parser;
use crate::utils::fs::FileSystem;
use crate::Result;
use serde::Serialize;
use std::path::Path;

/// Directory tokens that never count towards a match.
const IGNORED_TOKENS: &[&str] = &["-", "_"];

/// A show directory that shares at least one token with the filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMatch {
    /// Directory name under the library root.
    pub directory_name: String,
    /// Number of matched tokens.
    pub score: usize,
}

/// Count directory tokens present in the (uppercased) show name tokens.
///
/// Repeated directory tokens are counted each time they occur.
pub fn score_directory(directory_name: &str, show_tokens: &[&str]) -> usize {
    directory_name
        .to_uppercase()
        .split_whitespace()
        .filter(|token| !IGNORED_TOKENS.contains(token))
        .filter(|token| show_tokens.contains(token))
        .count()
}

/// Score all subdirectories of `root` against `filename`, best first.
///
/// Directories are visited in name order and the sort is stable, so equal
/// scores keep name order. Zero-score directories are left out.
pub fn rank_candidates<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    filename: &str,
) -> Result<Vec<CandidateMatch>> {
    let mut entries = fs
        .list_entries(root)
        .map_err(|source| crate::Error::TargetUnreachable {
            path: root.to_path_buf(),
            source,
        })?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    // Parse before case folding: the NxM marker is lowercase only
    let show_name = parser::extract_show_name(filename)?.to_uppercase();
    let show_tokens: Vec<&str> = show_name.split('.').collect();

    let mut candidates = Vec::new();
    for entry in entries {
        if !entry.is_dir {
            continue;
        }
        let score = score_directory(&entry.name, &show_tokens);
        tracing::debug!("Scored '{}' against '{}': {}", entry.name, show_name, score);
        if score > 0 {
            candidates.push(CandidateMatch {
                directory_name: entry.name,
                score,
            });
        }
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(candidates)
}

/// Find the best matching show directory under `root` for `filename`.
pub fn find_best_match<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    filename: &str,
) -> Result<CandidateMatch> {
    let candidates = rank_candidates(fs, root, filename)?;
    tracing::debug!("Candidates for '{}': {:?}", filename, candidates);

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| crate::Error::NoMatch(filename.to_string()))
}
