//! File and directory sizing.
//!
//! Symbolic links are never followed: a link contributes zero bytes and is
//! not descended into, so a directory's size only counts regular files
//! that physically live under it.

use std::path::Path;

use walkdir::WalkDir;

use game_archive_core::ScanError;

/// Size in bytes of a single file.
///
/// Fails with [`ScanError::NotFound`] when the path is gone at call time.
pub fn file_size(path: &Path) -> Result<u64, ScanError> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.len()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ScanError::not_found(path)),
        Err(e) => Err(ScanError::Io(e)),
    }
}

/// Total size in bytes of all regular files under `path`, recursively.
///
/// Returns 0 for an empty or missing directory. Entries that cannot be
/// read are skipped.
pub fn directory_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                log::debug!("Skipping unreadable entry while sizing {}: {}", path.display(), e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

#[cfg(test)]
#[path = "tests/size_tests.rs"]
mod tests;
