//! Scan and enrichment event reporting.

use std::path::Path;

use game_archive_core::{ConsoleDefinition, GameEntry, ScanError};

use crate::error::ProviderError;

/// Trait for receiving events while catalogs are built and enriched.
///
/// Passed explicitly to [`crate::build_catalogs`] and [`crate::Enricher`].
pub trait ScanProgress {
    /// Called when a console's folder was found under the root.
    fn on_console_resolved(&self, console: &ConsoleDefinition, directory: &Path);

    /// Called when no folder matched the console's short name.
    fn on_console_missing(&self, console: &ConsoleDefinition, root: &Path);

    /// Called once per console after discovery and sizing.
    fn on_games_discovered(&self, console: &ConsoleDefinition, games: &[GameEntry], size_bytes: u64);

    /// Called when discovery failed; the console is reported with no games.
    fn on_scan_error(&self, console: &ConsoleDefinition, error: &ScanError);

    /// Called after a provider lookup matched an entry.
    fn on_enrich_hit(&self, game: &GameEntry);

    /// Called after a provider lookup found nothing (or failed).
    fn on_enrich_miss(&self, game: &GameEntry, error: Option<&ProviderError>);
}

/// A no-op progress reporter that discards all events.
pub struct SilentProgress;

impl ScanProgress for SilentProgress {
    fn on_console_resolved(&self, _console: &ConsoleDefinition, _directory: &Path) {}
    fn on_console_missing(&self, _console: &ConsoleDefinition, _root: &Path) {}
    fn on_games_discovered(&self, _console: &ConsoleDefinition, _games: &[GameEntry], _size_bytes: u64) {}
    fn on_scan_error(&self, _console: &ConsoleDefinition, _error: &ScanError) {}
    fn on_enrich_hit(&self, _game: &GameEntry) {}
    fn on_enrich_miss(&self, _game: &GameEntry, _error: Option<&ProviderError>) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ScanProgress for LogProgress {
    fn on_console_resolved(&self, console: &ConsoleDefinition, directory: &Path) {
        log::info!(
            "Found {} ({}) at {}",
            console.name,
            console.short_name,
            directory.display()
        );
    }

    fn on_console_missing(&self, console: &ConsoleDefinition, root: &Path) {
        log::warn!(
            "Could not find a '{}' directory for {} under {} (searched recursively)",
            console.short_name,
            console.name,
            root.display()
        );
    }

    fn on_games_discovered(&self, console: &ConsoleDefinition, games: &[GameEntry], size_bytes: u64) {
        for game in games {
            log::debug!("  {} [{}] {}", game.title, game.filetype, game.path.display());
        }
        log::info!(
            "  {} games, {} on disk",
            games.len(),
            game_archive_core::human_readable_size(size_bytes)
        );
        if games.is_empty() {
            log::warn!("  No games found for {}", console.short_name);
        }
    }

    fn on_scan_error(&self, console: &ConsoleDefinition, error: &ScanError) {
        log::error!(
            "Error while looking for {} games in the {:?} formats: {}",
            console.short_name,
            console.rom_formats,
            error
        );
    }

    fn on_enrich_hit(&self, game: &GameEntry) {
        log::debug!("  Matched '{}' -> '{}'", game.title, game.display_title());
    }

    fn on_enrich_miss(&self, game: &GameEntry, error: Option<&ProviderError>) {
        match error {
            Some(e) => log::warn!("  Lookup failed for '{}': {}", game.title, e),
            None => log::info!("  No metadata found for '{}'", game.title),
        }
    }
}
