pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod scan;

use std::path::Path;

use game_archive_lib::ArchiveConfig;

use crate::error::CliError;

/// Load the config file, reporting which one is in use.
pub(crate) fn load_config(path: &Path) -> Result<ArchiveConfig, CliError> {
    log::debug!("Using config file {}", path.display());
    let config = ArchiveConfig::load(path)?;
    log::debug!("{} consoles configured", config.consoles.len());
    Ok(config)
}
