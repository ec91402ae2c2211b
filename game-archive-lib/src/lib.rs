//! Library scanning and aggregation.
//!
//! Given a ROM root and a list of console definitions, this crate finds
//! each console's folder, discovers the games inside it, sizes everything
//! and optionally enriches entries from an external metadata provider.
//! The resulting [`LibraryReport`] is what report writers consume.

pub mod catalog;
pub mod config;
pub mod enrich;
pub mod error;
pub mod locator;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod size;

pub use catalog::{ConsoleCatalog, build_catalogs};
pub use config::{ArchiveConfig, RawgConfig};
pub use enrich::{Enricher, MetadataProvider, ProviderRecord, merge_record};
pub use error::{ConfigError, ProviderError};
pub use locator::locate_console_directory;
pub use progress::{LogProgress, ScanProgress, SilentProgress};
pub use report::{LibraryGame, LibraryReport, RunTotals};
pub use scanner::{ScanOptions, discover_games};
pub use size::{directory_size, file_size};

// Re-export core types so downstream crates only need this one.
pub use game_archive_core::{
    ConsoleDefinition, Enrichment, FileType, GameEntry, GameMetadata, RomFormat, ScanError,
    human_readable_size,
};
