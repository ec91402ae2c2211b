//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "game-archive")]
#[command(about = "Catalog a console game library into a spreadsheet report", long_about = None)]
pub(crate) struct Cli {
    /// Root path containing console folders (overrides the config file)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file to use (TOML, or JSON with a .json extension)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scan the library and write the report
    Scan {
        /// Only scan these consoles, by short name (e.g., gb,snes,psx)
        #[arg(short, long, value_delimiter = ',')]
        consoles: Option<Vec<String>>,

        /// Skip RAWG metadata lookups even if enabled
        #[arg(long)]
        no_enrich: bool,

        /// Report path: a .xlsx workbook, or a directory of CSV sheets for any
        /// other path (default: <root>/game_archive.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the configured consoles
    List,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the config file in use and where RAWG settings come from
    Show,

    /// Print the config file path
    Path,
}
