use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_archive_lib::{
    ArchiveConfig, ConsoleDefinition, ConsoleCatalog, Enricher, GameEntry, LibraryReport,
    LogProgress, MetadataProvider, ProviderError, ScanError, ScanProgress, build_catalogs,
};
use game_archive_rawg::{Credentials, RawgClient, connect};
use game_archive_report::writer_for;

use crate::error::CliError;

/// Reports lookup results above the progress bar.
struct CliEnrichProgress {
    pb: ProgressBar,
    quiet: bool,
}

impl ScanProgress for CliEnrichProgress {
    fn on_console_resolved(&self, console: &ConsoleDefinition, directory: &Path) {
        LogProgress.on_console_resolved(console, directory);
    }

    fn on_console_missing(&self, console: &ConsoleDefinition, root: &Path) {
        LogProgress.on_console_missing(console, root);
    }

    fn on_games_discovered(&self, console: &ConsoleDefinition, games: &[GameEntry], size_bytes: u64) {
        LogProgress.on_games_discovered(console, games, size_bytes);
    }

    fn on_scan_error(&self, console: &ConsoleDefinition, error: &ScanError) {
        LogProgress.on_scan_error(console, error);
    }

    fn on_enrich_hit(&self, game: &GameEntry) {
        self.pb.set_message(game.title.clone());
        self.pb.suspend(|| {
            log::debug!(
                "  {} {} -> {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                game.title,
                game.display_title().if_supports_color(Stdout, |t| t.bold()),
            );
        });
    }

    fn on_enrich_miss(&self, game: &GameEntry, error: Option<&ProviderError>) {
        self.pb.set_message(game.title.clone());
        self.pb.suspend(|| match error {
            Some(e) => log::warn!(
                "  {} {}: {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                game.title,
                e,
            ),
            None if !self.quiet => log::info!(
                "  {} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                game.title.if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => {}
        });
    }
}

/// Pick the consoles to scan. With no filter every configured console is
/// scanned, in config order.
fn select_consoles(
    config: &ArchiveConfig,
    filter: Option<Vec<String>>,
) -> Result<Vec<ConsoleDefinition>, CliError> {
    let Some(names) = filter else {
        return Ok(config.consoles.clone());
    };
    names
        .iter()
        .map(|name| {
            config.console(name).cloned().ok_or_else(|| {
                CliError::unknown_console(format!(
                    "'{}' is not in the config file. Run 'game-archive list' to see configured consoles.",
                    name
                ))
            })
        })
        .collect()
}

/// Connect to RAWG unless enrichment is switched off. Any failure is
/// reported and the run continues without enrichment.
fn connect_provider(config: &ArchiveConfig, no_enrich: bool) -> Option<RawgClient> {
    if no_enrich {
        log::info!("Metadata enrichment skipped (--no-enrich)");
        return None;
    }
    let creds = Credentials::load(config.rawg.as_ref());
    match connect(&creds) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to connect to RAWG: {}", e);
            log::warn!("Continuing without metadata enrichment");
            None
        }
    }
}

fn enrich(catalogs: &mut [ConsoleCatalog], provider: &dyn MetadataProvider, quiet: bool) -> usize {
    let total: usize = catalogs.iter().map(ConsoleCatalog::game_count).sum();
    let pb = if quiet {
        ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden())
    } else {
        ProgressBar::new(total as u64)
    };
    if let Ok(style) =
        ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {wide_msg}")
    {
        pb.set_style(style);
    }

    let progress = CliEnrichProgress {
        pb: pb.clone(),
        quiet,
    };
    let enricher = Enricher::new(Some(provider), &progress);
    let queried = enricher.enrich_catalogs(catalogs, |done, _| pb.set_position(done as u64));
    pb.finish_and_clear();
    queried
}

/// Scan the library, enrich it, and write the report.
pub(crate) fn run_scan(
    config: &ArchiveConfig,
    root: Option<PathBuf>,
    consoles: Option<Vec<String>>,
    no_enrich: bool,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let definitions = select_consoles(config, consoles)?;
    let root = config.resolve_root(root);
    let output = config.resolve_output(output, &root);

    log::info!(
        "{}",
        format!(
            "Scanning {} consoles under {}",
            definitions.len(),
            root.display()
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );

    let mut catalogs = build_catalogs(&definitions, &root, &config.scan_options(), &LogProgress);

    let provider = connect_provider(config, no_enrich);
    let enriched = match &provider {
        Some(client) => {
            log::info!("");
            log::info!(
                "{}",
                "Looking up game metadata".if_supports_color(Stdout, |t| t.bold()),
            );
            let queried = enrich(&mut catalogs, client, quiet);
            let matched = catalogs
                .iter()
                .flat_map(|c| &c.games)
                .filter(|g| g.enrichment.metadata().is_some())
                .count();
            log::info!("  Matched {} of {} games", matched, queried);
            true
        }
        None => false,
    };

    let report = LibraryReport::assemble(&root, catalogs, enriched);
    let writer = writer_for(&output);
    let written = writer.write_report(&report, &output)?;

    let missing = report
        .catalogs
        .iter()
        .filter(|c| c.directory.is_none())
        .count();
    log::info!("");
    log::info!("{}", "Scan complete".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Consoles:      {:>6}", report.catalogs.len());
    if missing > 0 {
        log::info!("  Not found:     {:>6}", missing);
    }
    log::info!("  Games:         {:>6}", report.totals.total_games);
    log::info!("  Library size:  {:>12}", report.totals.total_size_human);
    log::info!(
        "  Report:        {} ({}, {} files)",
        output.display().if_supports_color(Stdout, |t| t.cyan()),
        writer.name(),
        written.len(),
    );
    Ok(())
}
