//! Run-level data handed to report writers.

use std::path::{Path, PathBuf};

use game_archive_core::{GameEntry, human_readable_size};

use crate::catalog::ConsoleCatalog;
use crate::size::directory_size;

/// Date format used for the export timestamp (e.g., "10/19/2026").
pub const EXPORT_DATE_FORMAT: &str = "%m/%d/%Y";

/// A game tagged with the short name of the console that owns it.
#[derive(Debug, Clone, Copy)]
pub struct LibraryGame<'a> {
    pub console: &'a str,
    pub game: &'a GameEntry,
}

/// Totals shown at the bottom of the overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTotals {
    pub total_games: usize,
    /// Recursive size of the whole ROM root
    pub total_size_bytes: u64,
    pub total_size_human: String,
    pub export_timestamp: String,
}

/// Everything a report writer needs for one run.
#[derive(Debug, Clone)]
pub struct LibraryReport {
    pub root: PathBuf,
    pub catalogs: Vec<ConsoleCatalog>,
    pub totals: RunTotals,
    /// Whether a metadata provider was active for this run
    pub enriched: bool,
}

impl LibraryReport {
    /// Assemble the report, stamping it with the current local date.
    pub fn assemble(root: &Path, catalogs: Vec<ConsoleCatalog>, enriched: bool) -> Self {
        let timestamp = chrono::Local::now().format(EXPORT_DATE_FORMAT).to_string();
        Self::assemble_at(root, catalogs, enriched, timestamp)
    }

    /// Assemble the report with an explicit timestamp.
    pub fn assemble_at(
        root: &Path,
        catalogs: Vec<ConsoleCatalog>,
        enriched: bool,
        export_timestamp: String,
    ) -> Self {
        let total_games = catalogs.iter().map(|c| c.games.len()).sum();
        let total_size_bytes = directory_size(root);
        Self {
            root: root.to_path_buf(),
            catalogs,
            totals: RunTotals {
                total_games,
                total_size_bytes,
                total_size_human: human_readable_size(total_size_bytes),
                export_timestamp,
            },
            enriched,
        }
    }

    /// Every game across all consoles, in console declaration order.
    pub fn all_games(&self) -> impl Iterator<Item = LibraryGame<'_>> {
        self.catalogs.iter().flat_map(|catalog| {
            catalog.games.iter().map(move |game| LibraryGame {
                console: catalog.short_name(),
                game,
            })
        })
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
