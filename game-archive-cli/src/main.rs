//! game-archive CLI
//!
//! Command-line interface for cataloguing a console game library.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use game_archive_lib::config::resolve_config_path;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = resolve_config_path(cli.config);

    match cli.command {
        Commands::Scan {
            consoles,
            no_enrich,
            output,
        } => {
            let config = commands::load_config(&config_path)?;
            commands::scan::run_scan(&config, cli.root, consoles, no_enrich, output, cli.quiet)
        }
        Commands::List => {
            let config = commands::load_config(&config_path)?;
            commands::list::run_list(&config);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&config_path);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path(&config_path, &mut std::io::stdout().lock())?;
                Ok(())
            }
        },
    }
}
