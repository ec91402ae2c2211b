use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_archive_lib::ArchiveConfig;
use game_archive_rawg::{CredentialSource, Credentials, credential_sources};

fn mask_value(s: &str) -> String {
    match s.get(..2) {
        Some(head) if s.len() > 2 => format!("{head}****"),
        _ => "****".to_string(),
    }
}

/// Show the config file in use and where each RAWG setting comes from.
pub(crate) fn run_config_show(path: &Path) {
    log::info!(
        "{}",
        "game-archive Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    let config = if path.is_file() {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
        match ArchiveConfig::load(path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("  Config file could not be loaded: {}", e);
                None
            }
        }
    } else {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
        None
    };

    if let Some(config) = &config {
        log::info!("  Consoles:    {}", config.consoles.len());
        if let Some(root) = &config.rom_root_directory {
            log::info!("  ROM root:    {}", root.display());
        }
        if let Some(output) = &config.output_spreadsheet {
            log::info!("  Output:      {}", output.display());
        }
    }
    log::info!("");

    let rawg = config.as_ref().and_then(|c| c.rawg.as_ref());
    let creds = Credentials::load(rawg);
    let sources = credential_sources(rawg);

    log::info!("{}", "RAWG".if_supports_color(Stdout, |t| t.bold()));
    let api_key = match (&sources.api_key, creds.api_key.as_deref()) {
        (CredentialSource::Missing, _) | (_, None) => None,
        (_, Some(key)) => Some(mask_value(key)),
    };
    let fields = [
        ("enabled", &sources.enabled, Some(creds.enabled.to_string())),
        ("api_key", &sources.api_key, api_key),
        (
            "timeout",
            &sources.timeout,
            Some(format!("{}s", creds.timeout.as_secs())),
        ),
    ];

    for (name, source, value) in fields {
        let source_str = format!("({})", source);
        match value {
            Some(v) => log::info!(
                "  {:<10} {} {}",
                name,
                v,
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "  {:<10} {}",
                name,
                "not set".if_supports_color(Stdout, |t| t.red()),
            ),
        }
    }
}

/// Print the config file path. Written straight to `out` so `--quiet`
/// does not hide it.
pub(crate) fn run_config_path(path: &Path, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", path.display())
}
