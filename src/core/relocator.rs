//! Relocation of a single video into its show's season folder.

use crate::core::{matcher, parser};
use crate::models::catalog::{Section, Video};
use crate::models::outcome::Relocation;
use crate::utils::fs::{file_name, season_path, FileSystem};
use crate::Result;
use std::path::PathBuf;

/// Move one video to `<target root>/<show>/Season <n>/<file name>`.
///
/// Nothing on disk changes unless a show directory matched and the season
/// parsed. A file already at its destination is left alone and reported with
/// `moved == false`.
pub fn relocate<F: FileSystem + ?Sized>(fs: &F, video: &Video, target: &Section) -> Result<Relocation> {
    let best = matcher::find_best_match(fs, &target.root_path, &video.title)?;
    let season = parser::extract_season(&video.title)?;
    let episode = parser::extract_episode(&video.title).ok();

    let name = file_name(&video.source_file_path)
        .ok_or_else(|| crate::Error::InvalidSourcePath(video.source_file_path.clone()))?;

    let target_folder = season_path(&target.root_path, &best.directory_name, season);
    let from = PathBuf::from(&video.source_file_path);
    let to = target_folder.join(name);

    if from == to {
        tracing::debug!("Already in place: {:?}", to);
        return Ok(Relocation {
            from,
            to,
            show_directory: best.directory_name,
            season,
            episode,
            moved: false,
        });
    }

    if !fs.exists(&target_folder) {
        fs.create_dir_all(&target_folder)
            .map_err(|e| crate::Error::io("create directory", &target_folder, e))?;
        tracing::debug!("Created directory: {:?}", target_folder);
    }

    tracing::info!("Moving video: {} -> {}", from.display(), to.display());
    fs.move_file(&from, &to)
        .map_err(|e| crate::Error::io("move", &from, e))?;

    Ok(Relocation {
        from,
        to,
        show_directory: best.directory_name,
        season,
        episode,
        moved: true,
    })
}
