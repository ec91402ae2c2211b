use super::*;

use std::cell::Cell;
use std::collections::HashMap;
use std::path::PathBuf;

use game_archive_core::ConsoleDefinition;

use crate::progress::SilentProgress;

/// Provider backed by a map, counting every call.
struct MockProvider {
    records: HashMap<String, ProviderRecord>,
    fail: bool,
    calls: Cell<usize>,
}

impl MockProvider {
    fn new(records: &[(&str, ProviderRecord)]) -> Self {
        Self {
            records: records
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            fail: false,
            calls: Cell::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            records: HashMap::new(),
            fail: true,
            calls: Cell::new(0),
        }
    }
}

impl MetadataProvider for MockProvider {
    fn search_by_title(&self, title: &str) -> Result<Option<ProviderRecord>, ProviderError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(ProviderError::Timeout);
        }
        Ok(self.records.get(title).cloned())
    }
}

fn zelda_record() -> ProviderRecord {
    ProviderRecord {
        name: "Zelda".to_string(),
        release_date: Some("1986-02-21".to_string()),
        score: None,
        genres: Some(vec!["Action".to_string()]),
        tags: Some(vec![]),
    }
}

fn entry(title: &str) -> GameEntry {
    GameEntry::file(PathBuf::from(format!("/roms/nes/{title}.nes")), 128)
}

#[test]
fn match_copies_fields() {
    let provider = MockProvider::new(&[("zelda", zelda_record())]);
    let enricher = Enricher::new(Some(&provider), &SilentProgress);
    let mut game = entry("zelda");

    assert!(enricher.enrich(&mut game));

    assert_eq!(game.display_title(), "Zelda");
    let meta = game.enrichment.metadata().unwrap();
    assert_eq!(meta.release_date.as_deref(), Some("1986-02-21"));
    assert_eq!(meta.metacritic, None);
    assert_eq!(meta.genres, Some(vec!["Action".to_string()]));
    assert_eq!(meta.tags, Some(vec![]));
}

#[test]
fn no_match_keeps_title_and_clears_fields() {
    let provider = MockProvider::new(&[]);
    let enricher = Enricher::new(Some(&provider), &SilentProgress);
    let mut game = entry("unknown homebrew");

    enricher.enrich(&mut game);

    assert_eq!(game.enrichment, Enrichment::NoMatch);
    assert_eq!(game.display_title(), "unknown homebrew");
    assert!(game.enrichment.metadata().is_none());
}

#[test]
fn missing_lists_stay_absent() {
    let record = ProviderRecord {
        name: "Metroid".to_string(),
        release_date: None,
        score: Some(85),
        genres: None,
        tags: Some(vec!["exploration".to_string()]),
    };
    let provider = MockProvider::new(&[("metroid", record)]);
    let enricher = Enricher::new(Some(&provider), &SilentProgress);
    let mut game = entry("metroid");

    enricher.enrich(&mut game);

    let meta = game.enrichment.metadata().unwrap();
    assert_eq!(meta.genres, None);
    assert_eq!(meta.tags, Some(vec!["exploration".to_string()]));
    assert_eq!(meta.metacritic, Some(85));
}

#[test]
fn blank_provider_name_falls_back_to_title() {
    let record = ProviderRecord {
        name: "  ".to_string(),
        ..Default::default()
    };
    let mut game = entry("kirby");
    merge_record(&mut game, Some(record));
    assert_eq!(game.display_title(), "kirby");
}

#[test]
fn provider_errors_become_no_match() {
    let provider = MockProvider::failing();
    let enricher = Enricher::new(Some(&provider), &SilentProgress);
    let mut game = entry("zelda");

    assert!(enricher.enrich(&mut game));

    assert_eq!(game.enrichment, Enrichment::NoMatch);
    assert_eq!(provider.calls.get(), 1);
}

#[test]
fn second_enrichment_does_not_query_again() {
    let provider = MockProvider::new(&[("zelda", zelda_record())]);
    let enricher = Enricher::new(Some(&provider), &SilentProgress);
    let mut game = entry("zelda");

    enricher.enrich(&mut game);
    let first = game.clone();
    assert!(!enricher.enrich(&mut game));

    assert_eq!(game, first);
    assert_eq!(provider.calls.get(), 1);
}

#[test]
fn merge_is_idempotent() {
    let mut game = entry("zelda");
    merge_record(&mut game, Some(zelda_record()));
    let once = game.clone();
    merge_record(&mut game, Some(zelda_record()));
    assert_eq!(game, once);

    merge_record(&mut game, None);
    let missed = game.clone();
    merge_record(&mut game, None);
    assert_eq!(game, missed);
}

#[test]
fn disabled_enricher_passes_entries_through() {
    let enricher = Enricher::new(None, &SilentProgress);
    let mut game = entry("zelda");
    let before = game.clone();

    assert!(!enricher.is_enabled());
    assert!(!enricher.enrich(&mut game));

    assert_eq!(game, before);
    assert_eq!(game.display_title(), "zelda");
}

#[test]
fn enrich_catalogs_reuses_cached_results() {
    let provider = MockProvider::new(&[("zelda", zelda_record())]);
    let enricher = Enricher::new(Some(&provider), &SilentProgress);

    let mut catalog =
        ConsoleCatalog::empty(ConsoleDefinition::new("NES", "nes", "Nintendo", &[".nes"]));
    catalog.games = vec![entry("zelda"), entry("contra")];
    let mut catalogs = vec![catalog];

    let mut seen = Vec::new();
    let queried = enricher.enrich_catalogs(&mut catalogs, |done, total| seen.push((done, total)));
    assert_eq!(queried, 2);
    assert_eq!(seen, vec![(1, 2), (2, 2)]);

    let queried_again = enricher.enrich_catalogs(&mut catalogs, |_, _| {});
    assert_eq!(queried_again, 0);
    assert_eq!(provider.calls.get(), 2);
    assert_eq!(catalogs[0].games[0].display_title(), "Zelda");
    assert_eq!(catalogs[0].games[1].enrichment, Enrichment::NoMatch);
}
