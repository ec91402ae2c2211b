//! Game entries produced by discovery and optionally enriched with
//! external metadata.

use std::path::{Path, PathBuf};

use crate::util::human_readable_size;

/// How a game is stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileType {
    /// A directory holding the whole game
    Folder,
    /// A file; holds the uppercased extension without the dot (e.g., "ZIP")
    Extension(String),
}

impl FileType {
    /// Build from a path's extension, uppercased. Files without an
    /// extension get an empty label.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_uppercase();
        FileType::Extension(ext)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FileType::Folder => "FOLDER",
            FileType::Extension(ext) => ext,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive fields copied from a matched provider record.
///
/// `None` means the provider had no such field; `Some(vec![])` means it
/// had the field but the list was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameMetadata {
    pub display_title: String,
    pub release_date: Option<String>,
    pub metacritic: Option<u32>,
    pub genres: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

/// Enrichment state of a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Enrichment {
    /// No lookup has been attempted (or enrichment is disabled)
    #[default]
    NotEnriched,
    /// A lookup was made and the provider had nothing for this title
    NoMatch,
    /// A lookup was made and returned a record
    Matched(GameMetadata),
}

impl Enrichment {
    pub fn is_attempted(&self) -> bool {
        !matches!(self, Enrichment::NotEnriched)
    }

    pub fn metadata(&self) -> Option<&GameMetadata> {
        match self {
            Enrichment::Matched(meta) => Some(meta),
            _ => None,
        }
    }
}

/// One game found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// File stem or directory name
    pub title: String,
    pub filetype: FileType,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub size_human: String,
    pub enrichment: Enrichment,
}

impl GameEntry {
    /// Create an entry for a directory-as-game.
    pub fn folder(path: PathBuf, size_bytes: u64) -> Self {
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(title, FileType::Folder, path, size_bytes)
    }

    /// Create an entry for a file-as-game.
    pub fn file(path: PathBuf, size_bytes: u64) -> Self {
        let title = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let filetype = FileType::from_path(&path);
        Self::new(title, filetype, path, size_bytes)
    }

    fn new(title: String, filetype: FileType, path: PathBuf, size_bytes: u64) -> Self {
        Self {
            title,
            filetype,
            path,
            size_bytes,
            size_human: human_readable_size(size_bytes),
            enrichment: Enrichment::NotEnriched,
        }
    }

    /// The provider's name for the game when matched, the on-disk title otherwise.
    pub fn display_title(&self) -> &str {
        match &self.enrichment {
            Enrichment::Matched(meta) => &meta.display_title,
            _ => &self.title,
        }
    }
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;
