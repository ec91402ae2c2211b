use super::*;

use std::fs;

use game_archive_lib::{
    ConsoleDefinition, Enrichment, GameMetadata, ScanOptions, SilentProgress, build_catalogs,
};

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .unwrap();
    rdr.records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn library() -> (tempfile::TempDir, LibraryReport) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("roms");
    fs::create_dir_all(root.join("gb")).unwrap();
    fs::write(root.join("gb/tetris.gb"), vec![0u8; 1024]).unwrap();
    fs::write(root.join("gb/zelda.gb"), vec![0u8; 2048]).unwrap();

    let consoles = [
        ConsoleDefinition::new("Game Boy", "gb", "Nintendo", &[".gb"]),
        ConsoleDefinition::new("Saturn", "saturn", "Sega", &[".cue"]),
    ];
    let catalogs = build_catalogs(&consoles, &root, &ScanOptions::default(), &SilentProgress);
    let report = LibraryReport::assemble_at(&root, catalogs, false, "10/19/2026".to_string());
    (dir, report)
}

fn file_names(written: &[PathBuf]) -> Vec<String> {
    written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn writes_one_file_per_sheet() {
    let (dir, report) = library();
    let out = dir.path().join("game_archive");

    let written = CsvReport::new().write_report(&report, &out).unwrap();

    assert_eq!(
        file_names(&written),
        ["overview.csv", "gb.csv", "saturn.csv", "all.csv"]
    );
    assert!(written.iter().all(|p| p.is_file()));
}

#[test]
fn overview_lists_consoles_and_totals() {
    let (dir, report) = library();
    let out = dir.path().join("out");
    CsvReport::new().write_report(&report, &out).unwrap();

    let rows = read_rows(&out.join(OVERVIEW_FILE));
    assert_eq!(rows[0], crate::layout::OVERVIEW_HEADER);
    assert_eq!(rows[1][0], "Game Boy");
    assert_eq!(rows[1][3], "2");
    assert_eq!(rows[1][4], "3.00 KiB");
    assert!(rows[1][5].ends_with("gb"));
    assert_eq!(rows[2][5], "Not Found");

    assert_eq!(rows[3], [""]);
    assert_eq!(rows[4], ["Total Games:", "2"]);
    assert_eq!(rows[5], ["Total Size:", "3.00 KiB"]);
    assert_eq!(rows[6], ["Exported on:", "10/19/2026"]);
}

#[test]
fn all_sheet_prefixes_console() {
    let (dir, report) = library();
    let out = dir.path().join("out");
    CsvReport::new().write_report(&report, &out).unwrap();

    let rows = read_rows(&out.join(ALL_FILE));
    assert_eq!(rows[0], ["Console", "Game", "Filetype", "Size", "Path"]);
    assert_eq!(rows[1][..4], ["gb", "tetris", "GB", "1.00 KiB"]);
    assert_eq!(rows[2][..4], ["gb", "zelda", "GB", "2.00 KiB"]);
    assert_eq!(rows[4], ["Total Games:", "2"]);
}

#[test]
fn empty_console_sheet_has_placeholder_row() {
    let (dir, report) = library();
    let out = dir.path().join("out");
    CsvReport::new().write_report(&report, &out).unwrap();

    let rows = read_rows(&out.join("saturn.csv"));
    assert_eq!(rows[0], crate::layout::GAME_HEADER);
    assert_eq!(
        rows[1],
        ["No games found for this console in the 'saturn' directory (recursively searched)"]
    );
    assert_eq!(rows[3], ["Total Games:", "0"]);
    assert_eq!(rows[4], ["Total Size:", "0.00 B"]);
}

#[test]
fn enrichment_columns_follow_game_columns() {
    let (dir, mut report) = library();
    report.enriched = true;
    report.catalogs[0].games[0].enrichment = Enrichment::Matched(GameMetadata {
        display_title: "Tetris".to_string(),
        release_date: Some("1989-06-14".to_string()),
        metacritic: Some(90),
        genres: Some(vec!["Puzzle".to_string(), "Arcade".to_string()]),
        tags: None,
    });
    report.catalogs[0].games[1].enrichment = Enrichment::NoMatch;

    let out = dir.path().join("out");
    CsvReport::new().write_report(&report, &out).unwrap();

    let rows = read_rows(&out.join("gb.csv"));
    assert_eq!(rows[0].len(), 9);
    assert_eq!(rows[0][4], "Display Title");
    assert_eq!(
        rows[1][4..],
        ["Tetris", "1989-06-14", "90", "Puzzle, Arcade", ""]
    );
    assert_eq!(rows[2][4..], ["zelda", "", "", "", ""]);

    let all = read_rows(&out.join(ALL_FILE));
    assert_eq!(all[0].len(), 10);
    assert_eq!(all[1][5], "Tetris");
    assert_eq!(all[2][5], "zelda");
}

#[test]
fn console_named_all_does_not_replace_the_all_games_sheet() {
    let (dir, mut report) = library();
    report.catalogs[0].definition.short_name = "all".to_string();
    report.catalogs[1].definition.short_name = "OVERVIEW".to_string();
    let out = dir.path().join("out");

    let written = CsvReport::new().write_report(&report, &out).unwrap();

    assert_eq!(
        file_names(&written),
        ["overview.csv", "all_2.csv", "OVERVIEW_2.csv", "all.csv"]
    );
    let all = read_rows(&out.join(ALL_FILE));
    assert_eq!(all[0][0], "Console");
    let overview = read_rows(&out.join(OVERVIEW_FILE));
    assert_eq!(overview[0][0], "Console");
    assert_eq!(overview[0][1], "Company");
}

#[test]
fn output_must_be_a_directory() {
    let (dir, report) = library();
    let out = dir.path().join("game_archive.csv");
    fs::write(&out, b"").unwrap();

    let err = CsvReport::new().write_report(&report, &out).unwrap_err();
    assert!(matches!(err, ReportError::NotADirectory(_)));
}
