//! Per-console catalogs.

use std::path::{Path, PathBuf};

use game_archive_core::{ConsoleDefinition, GameEntry, human_readable_size};

use crate::locator::locate_console_directory;
use crate::progress::ScanProgress;
use crate::scanner::{ScanOptions, discover_games};
use crate::size::directory_size;

/// Everything found on disk for one console.
///
/// `directory` is `None` when no folder matched the console's short name;
/// that is a valid "no local library" state with no games and zero size.
#[derive(Debug, Clone)]
pub struct ConsoleCatalog {
    pub definition: ConsoleDefinition,
    pub directory: Option<PathBuf>,
    /// Folder-games first, then file-games in walk order
    pub games: Vec<GameEntry>,
    /// Sum of every regular file under `directory`, matched or not
    pub directory_size_bytes: u64,
    pub directory_size_human: String,
    /// Set when discovery failed; `games` is then empty
    pub scan_error: Option<String>,
}

impl ConsoleCatalog {
    /// Resolve, discover and size one console. Never fails: errors are
    /// reported to `progress` and leave the catalog empty.
    pub fn build(
        definition: ConsoleDefinition,
        root: &Path,
        options: &ScanOptions,
        progress: &dyn ScanProgress,
    ) -> Self {
        let directory = locate_console_directory(&definition.short_name, root);

        let Some(dir) = directory.as_deref() else {
            progress.on_console_missing(&definition, root);
            return Self::empty(definition);
        };
        progress.on_console_resolved(&definition, dir);

        let (games, scan_error) =
            match discover_games(&definition.rom_formats, Some(dir), options) {
                Ok(games) => (games, None),
                Err(e) => {
                    progress.on_scan_error(&definition, &e);
                    (Vec::new(), Some(e.to_string()))
                }
            };

        let size = directory_size(dir);
        progress.on_games_discovered(&definition, &games, size);

        Self {
            definition,
            directory,
            games,
            directory_size_bytes: size,
            directory_size_human: human_readable_size(size),
            scan_error,
        }
    }

    /// A catalog for a console with no folder on disk.
    pub fn empty(definition: ConsoleDefinition) -> Self {
        Self {
            definition,
            directory: None,
            games: Vec::new(),
            directory_size_bytes: 0,
            directory_size_human: human_readable_size(0),
            scan_error: None,
        }
    }

    pub fn short_name(&self) -> &str {
        &self.definition.short_name
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}

/// Build a catalog for every console, in declaration order.
///
/// One console's failure never affects the others.
pub fn build_catalogs(
    definitions: &[ConsoleDefinition],
    root: &Path,
    options: &ScanOptions,
    progress: &dyn ScanProgress,
) -> Vec<ConsoleCatalog> {
    if !root.is_dir() {
        log::warn!(
            "ROM root {} does not exist, every console will be reported as not found",
            root.display()
        );
    }

    definitions
        .iter()
        .cloned()
        .map(|def| ConsoleCatalog::build(def, root, options, progress))
        .collect()
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
