//! Sheet layout shared by every report format.
//!
//! A report is a sequence of sheets: the library overview, one sheet per
//! console in config order, then every game across all consoles. Each sheet
//! is a header row, data rows and a short totals block.

use std::collections::HashSet;

use game_archive_lib::{ConsoleCatalog, GameEntry, LibraryReport};

pub const OVERVIEW_HEADER: [&str; 6] = [
    "Console",
    "Company",
    "Short Name",
    "Games",
    "Library Size",
    "Directory",
];
pub const GAME_HEADER: [&str; 4] = ["Game", "Filetype", "Size", "Path"];
pub const ENRICHMENT_HEADER: [&str; 5] = [
    "Display Title",
    "Release Date",
    "Metacritic",
    "Genres",
    "Tags",
];

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Count(u64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Count(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SheetKind<'a> {
    Overview,
    Console(&'a ConsoleCatalog),
    AllGames,
}

/// One sheet of the report, independent of the output format.
#[derive(Debug, Clone)]
pub struct Sheet<'a> {
    pub kind: SheetKind<'a>,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
    pub totals: Vec<(&'static str, Cell)>,
}

/// Lay out every sheet of `report` in output order.
pub fn layout(report: &LibraryReport) -> Vec<Sheet<'_>> {
    let mut sheets = Vec::with_capacity(report.catalogs.len() + 2);
    sheets.push(overview_sheet(report));
    sheets.extend(
        report
            .catalogs
            .iter()
            .map(|catalog| console_sheet(catalog, report.enriched)),
    );
    sheets.push(all_games_sheet(report));
    sheets
}

fn overview_sheet(report: &LibraryReport) -> Sheet<'_> {
    let rows = report
        .catalogs
        .iter()
        .map(|catalog| {
            let directory = catalog
                .directory
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| "Not Found".to_string());
            vec![
                Cell::text(&catalog.definition.name),
                Cell::text(&catalog.definition.company),
                Cell::text(catalog.short_name()),
                Cell::Count(catalog.game_count() as u64),
                Cell::text(&catalog.directory_size_human),
                Cell::Text(directory),
            ]
        })
        .collect();

    let totals = &report.totals;
    Sheet {
        kind: SheetKind::Overview,
        header: OVERVIEW_HEADER.to_vec(),
        rows,
        totals: vec![
            ("Total Games:", Cell::Count(totals.total_games as u64)),
            ("Total Size:", Cell::text(&totals.total_size_human)),
            ("Exported on:", Cell::text(&totals.export_timestamp)),
        ],
    }
}

fn console_sheet(catalog: &ConsoleCatalog, enriched: bool) -> Sheet<'_> {
    let mut header = GAME_HEADER.to_vec();
    if enriched {
        header.extend(ENRICHMENT_HEADER);
    }

    let mut rows = Vec::with_capacity(catalog.games.len().max(1));
    if let Some(err) = &catalog.scan_error {
        rows.push(vec![Cell::Text(format!("Scan failed: {err}"))]);
    } else if catalog.games.is_empty() {
        rows.push(vec![Cell::Text(format!(
            "No games found for this console in the '{}' directory (recursively searched)",
            catalog.short_name()
        ))]);
    }
    rows.extend(catalog.games.iter().map(|game| game_row(game, enriched)));

    Sheet {
        kind: SheetKind::Console(catalog),
        header,
        rows,
        totals: vec![
            ("Total Games:", Cell::Count(catalog.game_count() as u64)),
            ("Total Size:", Cell::text(&catalog.directory_size_human)),
        ],
    }
}

fn all_games_sheet(report: &LibraryReport) -> Sheet<'_> {
    let mut header = vec!["Console"];
    header.extend(GAME_HEADER);
    if report.enriched {
        header.extend(ENRICHMENT_HEADER);
    }

    let rows = report
        .all_games()
        .map(|entry| {
            let mut row = vec![Cell::text(entry.console)];
            row.extend(game_row(entry.game, report.enriched));
            row
        })
        .collect();

    Sheet {
        kind: SheetKind::AllGames,
        header,
        rows,
        totals: vec![
            (
                "Total Games:",
                Cell::Count(report.totals.total_games as u64),
            ),
            ("Total Size:", Cell::text(&report.totals.total_size_human)),
        ],
    }
}

/// Cells for one game. The display title is always filled in; the other
/// enrichment cells stay blank unless the lookup matched.
fn game_row(game: &GameEntry, enriched: bool) -> Vec<Cell> {
    let mut row = vec![
        Cell::text(&game.title),
        Cell::text(game.filetype.as_str()),
        Cell::text(&game.size_human),
        Cell::Text(game.path.display().to_string()),
    ];
    if !enriched {
        return row;
    }

    row.push(Cell::text(game.display_title()));
    match game.enrichment.metadata() {
        Some(meta) => row.extend([
            Cell::Text(meta.release_date.clone().unwrap_or_default()),
            Cell::Text(meta.metacritic.map(|m| m.to_string()).unwrap_or_default()),
            Cell::Text(join_list(meta.genres.as_deref())),
            Cell::Text(join_list(meta.tags.as_deref())),
        ]),
        None => row.extend(std::iter::repeat_n(
            Cell::Text(String::new()),
            ENRICHMENT_HEADER.len() - 1,
        )),
    }
    row
}

fn join_list(items: Option<&[String]>) -> String {
    items.map(|list| list.join(", ")).unwrap_or_default()
}

/// Turn candidate sheet names into unique, usable names.
///
/// Characters that are unsafe in file or tab names become `_`, names are
/// cut to `max_chars`, and a name that collides (ignoring case) with a
/// reserved name or an earlier one gets a `_2`, `_3`, ... suffix.
pub fn unique_names<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    reserved: &[&str],
    max_chars: usize,
) -> Vec<String> {
    let mut taken: HashSet<String> = reserved.iter().map(|r| r.to_lowercase()).collect();

    candidates
        .into_iter()
        .map(|candidate| {
            let base = sanitize(candidate, max_chars);
            let mut name = base.clone();
            let mut n = 2;
            while !taken.insert(name.to_lowercase()) {
                let suffix = format!("_{n}");
                let keep = max_chars.saturating_sub(suffix.chars().count());
                name = format!("{}{}", truncate(&base, keep), suffix);
                n += 1;
            }
            name
        })
        .collect()
}

fn sanitize(name: &str, max_chars: usize) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '[' | ']' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim().trim_matches('\'');
    let cut = truncate(cleaned, max_chars);
    let cut = cut.trim_end();
    if cut.is_empty() {
        "console".to_string()
    } else {
        cut.to_string()
    }
}

fn truncate(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect()
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
