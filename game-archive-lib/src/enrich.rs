//! Metadata enrichment.
//!
//! A [`MetadataProvider`] is queried by title; its answer is merged into the
//! entry's [`Enrichment`] state. Provider failures are logged and recorded as
//! "no match", so downstream code only ever sees the three enrichment states.

use game_archive_core::{Enrichment, GameEntry, GameMetadata};

use crate::catalog::ConsoleCatalog;
use crate::error::ProviderError;
use crate::progress::ScanProgress;

/// A record returned by a provider for a title search.
///
/// List fields are `None` when the provider omitted them entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderRecord {
    pub name: String,
    pub release_date: Option<String>,
    pub score: Option<u32>,
    pub genres: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

/// An external source of game metadata.
pub trait MetadataProvider {
    /// Search by title. `Ok(None)` means the provider has no match.
    fn search_by_title(&self, title: &str) -> Result<Option<ProviderRecord>, ProviderError>;
}

/// Overwrite `entry`'s enrichment with the outcome of one lookup.
///
/// Applying the same record twice leaves the entry unchanged.
pub fn merge_record(entry: &mut GameEntry, record: Option<ProviderRecord>) {
    entry.enrichment = match record {
        Some(record) => {
            let display_title = if record.name.trim().is_empty() {
                entry.title.clone()
            } else {
                record.name
            };
            Enrichment::Matched(GameMetadata {
                display_title,
                release_date: record.release_date,
                metacritic: record.score,
                genres: record.genres,
                tags: record.tags,
            })
        }
        None => Enrichment::NoMatch,
    };
}

/// Applies provider lookups to game entries, at most once per entry.
pub struct Enricher<'a> {
    provider: Option<&'a dyn MetadataProvider>,
    progress: &'a dyn ScanProgress,
}

impl<'a> Enricher<'a> {
    /// Create an enricher. Passing `None` disables lookups; entries then
    /// stay `NotEnriched` and display their on-disk title.
    pub fn new(provider: Option<&'a dyn MetadataProvider>, progress: &'a dyn ScanProgress) -> Self {
        Self { provider, progress }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Enrich a single entry. Returns true if the provider was queried.
    ///
    /// Entries that already carry a lookup result are left alone.
    pub fn enrich(&self, entry: &mut GameEntry) -> bool {
        let Some(provider) = self.provider else {
            return false;
        };
        if entry.enrichment.is_attempted() {
            return false;
        }

        match provider.search_by_title(&entry.title) {
            Ok(Some(record)) => {
                merge_record(entry, Some(record));
                self.progress.on_enrich_hit(entry);
            }
            Ok(None) => {
                merge_record(entry, None);
                self.progress.on_enrich_miss(entry, None);
            }
            Err(e) => {
                merge_record(entry, None);
                self.progress.on_enrich_miss(entry, Some(&e));
            }
        }
        true
    }

    /// Enrich every entry of every catalog, calling `on_entry` after each
    /// one with the running count and the total.
    pub fn enrich_catalogs(
        &self,
        catalogs: &mut [ConsoleCatalog],
        mut on_entry: impl FnMut(usize, usize),
    ) -> usize {
        let total: usize = catalogs.iter().map(|c| c.games.len()).sum();
        let mut done = 0;
        let mut queried = 0;
        for catalog in catalogs.iter_mut() {
            for entry in catalog.games.iter_mut() {
                if self.enrich(entry) {
                    queried += 1;
                }
                done += 1;
                on_entry(done, total);
            }
        }
        queried
    }
}

#[cfg(test)]
#[path = "tests/enrich_tests.rs"]
mod tests;
