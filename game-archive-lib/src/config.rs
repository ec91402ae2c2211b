//! Configuration file loading and path resolution.
//!
//! The config is TOML by default. A file ending in `.json` is read as JSON
//! and accepts the camelCase keys (`romRootDirectory`, `shortName`, ...).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use game_archive_core::ConsoleDefinition;

use crate::error::ConfigError;
use crate::scanner::ScanOptions;

/// Name of a config file picked up from the current directory.
pub const LOCAL_CONFIG_FILE: &str = "game-archive.toml";

/// Name of the report directory created under the ROM root by default.
pub const DEFAULT_OUTPUT_NAME: &str = "game_archive.xlsx";

/// Canonical path to the user config file: `~/.config/game-archive/config.toml`.
pub fn default_config_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("game-archive").join("config.toml")
}

/// Resolve the config file path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `game-archive.toml` in the current directory, if present
/// 3. [`default_config_path`]
pub fn resolve_config_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return local;
    }
    default_config_path()
}

/// Settings for the RAWG metadata provider. Every field can be overridden
/// from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawgConfig {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(alias = "apiKey", default)]
    pub api_key: Option<String>,
    #[serde(alias = "timeoutSecs", default)]
    pub timeout_secs: Option<u64>,
    #[serde(alias = "baseUrl", default)]
    pub base_url: Option<String>,
}

/// The parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default)]
    pub consoles: Vec<ConsoleDefinition>,
    #[serde(alias = "romRootDirectory", default)]
    pub rom_root_directory: Option<PathBuf>,
    #[serde(alias = "outputSpreadsheet", default)]
    pub output_spreadsheet: Option<PathBuf>,
    #[serde(alias = "excludeFolderGameContents", default)]
    pub exclude_folder_game_contents: bool,
    #[serde(default)]
    pub rawg: Option<RawgConfig>,
}

impl ArchiveConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let config = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the fields a scan cannot do without.
    ///
    /// Format tokens are not checked here; a bad token only affects its
    /// own console at scan time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.consoles.is_empty() {
            return Err(ConfigError::invalid("no consoles configured"));
        }
        for (i, console) in self.consoles.iter().enumerate() {
            if console.name.trim().is_empty() {
                return Err(ConfigError::invalid(format!("console #{} has no name", i + 1)));
            }
            if console.short_name.trim().is_empty() {
                return Err(ConfigError::invalid(format!(
                    "console '{}' has no short name",
                    console.name
                )));
            }
        }
        Ok(())
    }

    /// Resolve the ROM root: CLI override, then config, then the current
    /// directory. An empty configured path counts as unset.
    pub fn resolve_root(&self, cli_override: Option<PathBuf>) -> PathBuf {
        if let Some(p) = cli_override {
            return p;
        }
        match self.rom_root_directory.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            Some(p) => {
                log::info!("ROM root directory configured from file: {}", p.display());
                p.clone()
            }
            None => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                log::info!(
                    "No ROM root directory configured, using {}",
                    cwd.display()
                );
                cwd
            }
        }
    }

    /// Resolve the report output path: CLI override, then config, then
    /// `<root>/game_archive.xlsx`.
    pub fn resolve_output(&self, cli_override: Option<PathBuf>, root: &Path) -> PathBuf {
        if let Some(p) = cli_override {
            return p;
        }
        match self.output_spreadsheet.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            Some(p) => p.clone(),
            None => root.join(DEFAULT_OUTPUT_NAME),
        }
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            exclude_folder_game_contents: self.exclude_folder_game_contents,
        }
    }

    /// Find a console by short name (case-insensitive).
    pub fn console(&self, short_name: &str) -> Option<&ConsoleDefinition> {
        self.consoles
            .iter()
            .find(|c| c.short_name.eq_ignore_ascii_case(short_name))
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
