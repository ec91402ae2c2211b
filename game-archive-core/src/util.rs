/// Binary units in ascending order; the last one is the ceiling.
const UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Format a byte count with two decimal places (e.g., "1.50 KiB").
pub fn human_readable_size(bytes: u64) -> String {
    human_readable_size_with_precision(bytes, 2)
}

/// Format a byte count using 1024-based units.
///
/// Picks the largest unit that keeps the scaled value below 1024, except
/// that `PiB` is never exceeded.
pub fn human_readable_size_with_precision(bytes: u64, decimal_places: usize) -> String {
    let mut size = bytes as f64;
    let mut unit = UNITS[0];
    for (i, candidate) in UNITS.iter().enumerate() {
        unit = candidate;
        if size < 1024.0 || i == UNITS.len() - 1 {
            break;
        }
        size /= 1024.0;
    }
    format!("{size:.decimal_places$} {unit}")
}
