use super::*;

const TOML_CONFIG: &str = r#"
rom_root_directory = "/mnt/roms"
exclude_folder_game_contents = true

[rawg]
enabled = true
api_key = "abc123"
timeout_secs = 5

[[consoles]]
name = "Nintendo Entertainment System"
short_name = "nes"
company = "Nintendo"
rom_formats = [".nes", ".zip"]

[[consoles]]
name = "PlayStation 3"
short_name = "ps3"
company = "Sony"
rom_formats = ["folder"]
"#;

const JSON_CONFIG: &str = r#"{
  "romRootDirectory": "",
  "outputSpreadsheet": "/tmp/archive",
  "consoles": [
    {
      "name": "Super Nintendo",
      "shortName": "snes",
      "company": "Nintendo",
      "romFormats": [".sfc", ".smc"]
    }
  ]
}"#;

#[test]
fn parses_toml_config() {
    let config = ArchiveConfig::from_toml_str(TOML_CONFIG).unwrap();
    assert_eq!(config.consoles.len(), 2);
    assert_eq!(config.consoles[0].rom_formats, vec![".nes", ".zip"]);
    assert_eq!(config.consoles[1].short_name, "ps3");
    assert_eq!(config.rom_root_directory, Some(PathBuf::from("/mnt/roms")));
    assert!(config.scan_options().exclude_folder_game_contents);

    let rawg = config.rawg.unwrap();
    assert_eq!(rawg.enabled, Some(true));
    assert_eq!(rawg.api_key.as_deref(), Some("abc123"));
    assert_eq!(rawg.timeout_secs, Some(5));
}

#[test]
fn parses_camel_case_json_config() {
    let config = ArchiveConfig::from_json_str(JSON_CONFIG).unwrap();
    assert_eq!(config.consoles[0].short_name, "snes");
    assert_eq!(config.consoles[0].rom_formats, vec![".sfc", ".smc"]);
    assert!(config.rawg.is_none());
    assert!(!config.exclude_folder_game_contents);
}

#[test]
fn empty_console_list_is_invalid() {
    let err = ArchiveConfig::from_toml_str("consoles = []").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn console_without_short_name_is_invalid() {
    let toml = r#"
[[consoles]]
name = "Mystery"
short_name = ""
company = "Unknown"
rom_formats = [".bin"]
"#;
    let err = ArchiveConfig::from_toml_str(toml).unwrap_err();
    assert!(err.to_string().contains("Mystery"));
}

#[test]
fn missing_required_field_is_a_parse_error() {
    let toml = r#"
[[consoles]]
name = "No Short Name"
company = "Unknown"
"#;
    assert!(matches!(
        ArchiveConfig::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = ArchiveConfig::load(&dir.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Missing(_)));
}

#[test]
fn load_picks_parser_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("config.json");
    std::fs::write(&json_path, JSON_CONFIG).unwrap();
    let toml_path = dir.path().join("config.toml");
    std::fs::write(&toml_path, TOML_CONFIG).unwrap();

    assert_eq!(ArchiveConfig::load(&json_path).unwrap().consoles.len(), 1);
    assert_eq!(ArchiveConfig::load(&toml_path).unwrap().consoles.len(), 2);
}

#[test]
fn root_resolution_priority() {
    let config = ArchiveConfig::from_toml_str(TOML_CONFIG).unwrap();
    assert_eq!(
        config.resolve_root(Some(PathBuf::from("/cli"))),
        PathBuf::from("/cli")
    );
    assert_eq!(config.resolve_root(None), PathBuf::from("/mnt/roms"));

    let json = ArchiveConfig::from_json_str(JSON_CONFIG).unwrap();
    assert_eq!(json.resolve_root(None), std::env::current_dir().unwrap());
}

#[test]
fn output_resolution_priority() {
    let config = ArchiveConfig::from_toml_str(TOML_CONFIG).unwrap();
    let root = Path::new("/mnt/roms");
    assert_eq!(
        config.resolve_output(None, root),
        PathBuf::from("/mnt/roms/game_archive.xlsx")
    );
    assert_eq!(
        config.resolve_output(Some(PathBuf::from("/out")), root),
        PathBuf::from("/out")
    );

    let json = ArchiveConfig::from_json_str(JSON_CONFIG).unwrap();
    assert_eq!(json.resolve_output(None, root), PathBuf::from("/tmp/archive"));
}

#[test]
fn console_lookup_ignores_case() {
    let config = ArchiveConfig::from_toml_str(TOML_CONFIG).unwrap();
    assert_eq!(config.console("NES").unwrap().company, "Nintendo");
    assert!(config.console("gba").is_none());
}

#[test]
fn cli_config_override_wins() {
    assert_eq!(
        resolve_config_path(Some(PathBuf::from("/etc/archive.toml"))),
        PathBuf::from("/etc/archive.toml")
    );
}

#[test]
fn example_config_parses() {
    let config =
        ArchiveConfig::from_toml_str(include_str!("../../../game-archive.example.toml")).unwrap();
    assert!(config.console("psx").is_some());
    assert_eq!(config.rawg.unwrap().enabled, Some(false));
}
