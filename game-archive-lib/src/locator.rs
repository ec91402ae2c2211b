//! Finding a console's folder somewhere under the ROM root.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Search `root` for a directory named `short_name` (case-insensitive).
///
/// The walk is breadth-first and visits siblings in file name order, so
/// the shallowest match wins and ties go to the name that sorts first.
/// Symlinked directories are not entered. Returns `None` when nothing
/// matches or `root` cannot be read.
pub fn locate_console_directory(short_name: &str, root: &Path) -> Option<PathBuf> {
    let target = short_name.to_lowercase();
    let mut queue = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        let children = match sorted_subdirectories(&dir) {
            Ok(c) => c,
            Err(e) => {
                log::debug!("Cannot read {}: {}", dir.display(), e);
                continue;
            }
        };

        if let Some(found) = children.iter().find(|child| name_matches(child, &target)) {
            return Some(found.clone());
        }
        queue.extend(children);
    }

    None
}

fn name_matches(path: &Path, target: &str) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase() == target)
        .unwrap_or(false)
}

/// Immediate child directories of `dir`, sorted by name.
pub(crate) fn sorted_subdirectories(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries: Vec<std::fs::DirEntry> = skip_unreadable(dir, std::fs::read_dir(dir)?)
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .collect();
    entries.sort_by_key(|e| e.file_name());
    Ok(entries.into_iter().map(|e| e.path()).collect())
}

/// Drop entries that failed to read, logging each one.
pub(crate) fn skip_unreadable<T>(
    dir: &Path,
    entries: impl IntoIterator<Item = std::io::Result<T>>,
) -> impl Iterator<Item = T> {
    entries.into_iter().filter_map(move |entry| match entry {
        Ok(e) => Some(e),
        Err(e) => {
            log::debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
            None
        }
    })
}

#[cfg(test)]
#[path = "tests/locator_tests.rs"]
mod tests;
