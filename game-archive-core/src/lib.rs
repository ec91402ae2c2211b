//! Core data types shared by the scanner, the metadata provider and the
//! report writer. Nothing in this crate touches the filesystem.

pub mod console;
pub mod error;
pub mod game;
pub mod util;

pub use console::{ConsoleDefinition, RomFormat, parse_rom_formats};
pub use error::ScanError;
pub use game::{Enrichment, FileType, GameEntry, GameMetadata};
pub use util::human_readable_size;
