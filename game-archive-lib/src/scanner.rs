//! Game discovery inside a console folder.
//!
//! Two passes, in this order:
//! - one entry per immediate subdirectory when the console accepts `folder`
//! - one entry per file anywhere below the console folder whose name ends
//!   with an accepted extension
//!
//! Both passes run independently, so a file inside a folder-game that also
//! matches an extension is listed twice unless
//! [`ScanOptions::exclude_folder_game_contents`] is set. Directory totals are
//! computed separately and never double count.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use game_archive_core::{GameEntry, RomFormat, ScanError, parse_rom_formats};

use crate::locator::sorted_subdirectories;
use crate::size::{directory_size, file_size};

/// Options that control game discovery.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Skip extension matches that live inside a folder-game.
    pub exclude_folder_game_contents: bool,
}

/// Discover games under `console_dir` for the given format tokens.
///
/// Returns an empty list when `console_dir` is `None`. Folder-games come
/// first (sorted by name), then file-games in walk order (depth-first,
/// siblings sorted by name).
pub fn discover_games(
    rom_formats: &[String],
    console_dir: Option<&Path>,
    options: &ScanOptions,
) -> Result<Vec<GameEntry>, ScanError> {
    let Some(console_dir) = console_dir else {
        return Ok(Vec::new());
    };

    let formats = parse_rom_formats(rom_formats)?;

    if !console_dir.is_dir() {
        return Err(ScanError::not_found(console_dir));
    }

    let mut games = Vec::new();

    let mut folder_paths: Vec<PathBuf> = Vec::new();
    if formats.contains(&RomFormat::Folder) {
        folder_paths = sorted_subdirectories(console_dir).map_err(|source| ScanError::Walk {
            path: console_dir.to_path_buf(),
            source,
        })?;
        for path in &folder_paths {
            let size = directory_size(path);
            games.push(GameEntry::folder(path.clone(), size));
        }
    }

    let extensions: Vec<&RomFormat> = formats
        .iter()
        .filter(|f| matches!(f, RomFormat::Extension(_)))
        .collect();
    if extensions.is_empty() {
        return Ok(games);
    }

    for entry in WalkDir::new(console_dir)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ScanError::Walk {
            path: e.path().unwrap_or(console_dir).to_path_buf(),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !extensions.iter().any(|f| f.matches_file_name(&file_name)) {
            continue;
        }

        let path = entry.path();
        if options.exclude_folder_game_contents
            && folder_paths.iter().any(|folder| path.starts_with(folder))
        {
            log::debug!("Skipping {} (inside a folder-game)", path.display());
            continue;
        }

        match file_size(path) {
            Ok(size) => games.push(GameEntry::file(path.to_path_buf(), size)),
            Err(e) if e.is_not_found() => {
                log::warn!("{} disappeared during the scan, skipping", path.display());
            }
            Err(e) => return Err(e),
        }
    }

    Ok(games)
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
