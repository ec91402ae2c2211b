use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning a console's library.
///
/// None of these are fatal to a run: the catalog builder logs them and
/// treats the affected console (or entry) as empty.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A path that was expected to exist is gone
    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A configured ROM format token cannot be used for matching
    #[error("Malformed ROM format: {0}")]
    MalformedFormat(String),

    /// The recursive directory walk failed part way through
    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn malformed_format(msg: impl Into<String>) -> Self {
        Self::MalformedFormat(msg.into())
    }

    /// Returns true for the "path vanished" case, which callers recover
    /// from by skipping the affected entry.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io(e) | Self::Walk { source: e, .. } => {
                e.kind() == std::io::ErrorKind::NotFound
            }
            Self::MalformedFormat(_) => false,
        }
    }
}
