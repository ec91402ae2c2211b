//! Renderers that turn a [`LibraryReport`] into files on disk.

pub mod csv_report;
pub mod error;
pub mod layout;
pub mod xlsx;

pub use csv_report::CsvReport;
pub use error::ReportError;
pub use xlsx::XlsxWorkbook;

use std::path::{Path, PathBuf};

use game_archive_lib::LibraryReport;

/// Trait for report renderers.
pub trait ReportWriter {
    fn name(&self) -> &'static str;

    /// Write the report to `output` and return the files created.
    fn write_report(
        &self,
        report: &LibraryReport,
        output: &Path,
    ) -> Result<Vec<PathBuf>, ReportError>;
}

/// Pick a writer from the output path: a `.xlsx` path gets a single
/// workbook, anything else is a directory of CSV sheets.
pub fn writer_for(output: &Path) -> Box<dyn ReportWriter> {
    let is_xlsx = output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"));
    if is_xlsx {
        Box::new(XlsxWorkbook::new())
    } else {
        Box::new(CsvReport::new())
    }
}
