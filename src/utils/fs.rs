//! File system utilities.
//!
//! The sorter only touches the disk through [`FileSystem`] so the matching
//! and relocation logic can run against an in-memory tree in tests.

use std::io;
use std::path::{Path, PathBuf};

/// A directory entry as seen by the sorter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File or directory name (last path segment).
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

/// Filesystem operations needed to relocate videos.
pub trait FileSystem {
    /// List the immediate entries of a directory.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Move a file from one location to another.
    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            // Follows symlinks so linked show folders still count as directories
            let is_dir = entry.path().is_dir();
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    /// Rename only. Cross-filesystem moves fail instead of falling back to
    /// copy + delete.
    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

/// Last path segment of a `/`-separated source path.
///
/// Paths reported by the media server use the server's separators, so this
/// does not go through `Path::file_name`.
pub fn file_name(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Name of the per-season folder.
pub fn season_folder(season: u32) -> String {
    format!("Season {}", season)
}

/// Join `root/show/Season N`.
pub fn season_path(root: &Path, show: &str, season: u32) -> PathBuf {
    root.join(show).join(season_folder(season))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/unsorted/show.s01e01.mkv"), Some("show.s01e01.mkv"));
        assert_eq!(file_name("show.s01e01.mkv"), Some("show.s01e01.mkv"));
        assert_eq!(file_name("/unsorted/"), None);
        assert_eq!(file_name(""), None);
    }

    #[test]
    fn test_season_path() {
        assert_eq!(
            season_path(Path::new("/tv"), "Red Dwarf", 3),
            PathBuf::from("/tv/Red Dwarf/Season 3")
        );
    }

    #[test]
    fn test_list_entries_marks_directories() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("Red Dwarf")).unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();

        let mut entries = StdFileSystem.list_entries(temp_dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![
                DirEntry { name: "Red Dwarf".to_string(), is_dir: true },
                DirEntry { name: "notes.txt".to_string(), is_dir: false },
            ]
        );
    }

    #[test]
    fn test_list_entries_missing_dir() {
        assert!(StdFileSystem
            .list_entries(Path::new("/nonexistent/library"))
            .is_err());
    }

    #[test]
    fn test_move_file_renames() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("a.mkv");
        let to = temp_dir.path().join("b.mkv");
        std::fs::write(&from, "video").unwrap();

        StdFileSystem.move_file(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(std::fs::read_to_string(&to).unwrap(), "video");
    }
}
