use super::*;

use game_archive_core::FileType;

fn write_bytes(path: &Path, len: usize) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, vec![0u8; len]).unwrap();
}

fn formats(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn absent_directory_yields_no_games() {
    let games = discover_games(&formats(&[".zip"]), None, &ScanOptions::default()).unwrap();
    assert!(games.is_empty());
}

#[test]
fn extension_match_ignores_case() {
    let dir = tempfile::tempdir().unwrap();
    write_bytes(&dir.path().join("mario.zip"), 500);
    write_bytes(&dir.path().join("zelda.NES"), 320);
    write_bytes(&dir.path().join("readme.txt"), 10);

    let games = discover_games(
        &formats(&[".zip", ".nes"]),
        Some(dir.path()),
        &ScanOptions::default(),
    )
    .unwrap();

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].title, "mario");
    assert_eq!(games[0].filetype, FileType::Extension("ZIP".to_string()));
    assert_eq!(games[0].size_bytes, 500);
    assert_eq!(games[1].title, "zelda");
    assert_eq!(games[1].filetype, FileType::Extension("NES".to_string()));
    assert_eq!(games[1].size_bytes, 320);
}

#[test]
fn folder_format_yields_one_entry_per_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    write_bytes(&dir.path().join("Chrono Trigger/disc.bin"), 1000);
    write_bytes(&dir.path().join("Chrono Trigger/extra/notes.dat"), 200);

    let games =
        discover_games(&formats(&["folder"]), Some(dir.path()), &ScanOptions::default()).unwrap();

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].title, "Chrono Trigger");
    assert_eq!(games[0].filetype, FileType::Folder);
    assert_eq!(games[0].size_bytes, 1200);
    assert_eq!(games[0].path, dir.path().join("Chrono Trigger"));
}

#[test]
fn folder_games_come_before_file_games() {
    let dir = tempfile::tempdir().unwrap();
    write_bytes(&dir.path().join("aaa.iso"), 1);
    write_bytes(&dir.path().join("Zeta Game/data.pkg"), 5);
    write_bytes(&dir.path().join("Alpha Game/data.pkg"), 5);

    let games = discover_games(
        &formats(&["folder", ".iso"]),
        Some(dir.path()),
        &ScanOptions::default(),
    )
    .unwrap();

    let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha Game", "Zeta Game", "aaa"]);
}

#[test]
fn files_are_found_recursively_in_walk_order() {
    let dir = tempfile::tempdir().unwrap();
    write_bytes(&dir.path().join("b.gb"), 1);
    write_bytes(&dir.path().join("a/deep/c.gb"), 1);
    write_bytes(&dir.path().join("a/d.gb"), 1);

    let games =
        discover_games(&formats(&[".gb"]), Some(dir.path()), &ScanOptions::default()).unwrap();

    let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["d", "c", "b"]);
}

#[test]
fn matching_files_inside_folder_games_are_listed_twice_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write_bytes(&dir.path().join("Final Fantasy VII/disc1.cue"), 100);
    write_bytes(&dir.path().join("Final Fantasy VII/disc1.bin"), 900);

    let games = discover_games(
        &formats(&["folder", ".cue"]),
        Some(dir.path()),
        &ScanOptions::default(),
    )
    .unwrap();

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].title, "Final Fantasy VII");
    assert_eq!(games[0].size_bytes, 1000);
    assert_eq!(games[1].title, "disc1");
    assert_eq!(games[1].filetype.as_str(), "CUE");
}

#[test]
fn folder_game_contents_can_be_excluded() {
    let dir = tempfile::tempdir().unwrap();
    write_bytes(&dir.path().join("Final Fantasy VII/disc1.cue"), 100);
    write_bytes(&dir.path().join("loose.cue"), 50);

    let options = ScanOptions {
        exclude_folder_game_contents: true,
    };
    let games = discover_games(&formats(&["folder", ".cue"]), Some(dir.path()), &options).unwrap();

    let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Final Fantasy VII", "loose"]);
}

#[test]
fn missing_console_directory_is_a_scan_error() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("gone");
    let err = discover_games(&formats(&[".zip"]), Some(&gone), &ScanOptions::default())
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn malformed_format_is_a_scan_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = discover_games(&formats(&[".zip", ""]), Some(dir.path()), &ScanOptions::default())
        .unwrap_err();
    assert!(matches!(err, ScanError::MalformedFormat(_)));
}

#[test]
fn directories_named_like_roms_are_not_file_games() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("weird.zip")).unwrap();
    write_bytes(&dir.path().join("weird.zip/inner.zip"), 7);

    let games =
        discover_games(&formats(&[".zip"]), Some(dir.path()), &ScanOptions::default()).unwrap();

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].title, "inner");
}
