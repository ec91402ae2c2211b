use std::fs;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use game_archive_lib::LibraryReport;

use crate::layout::{Sheet, SheetKind, layout, unique_names};
use crate::{ReportError, ReportWriter};

pub const OVERVIEW_FILE: &str = "overview.csv";
pub const ALL_FILE: &str = "all.csv";

const MAX_NAME_CHARS: usize = 100;

/// Writes a report as a directory of CSV sheets: `overview.csv`, one
/// `<short_name>.csv` per console and `all.csv`.
#[derive(Debug, Default)]
pub struct CsvReport;

impl CsvReport {
    pub fn new() -> Self {
        Self
    }
}

/// File names for each sheet, in layout order. Console sheets never reuse
/// the overview or all-games name, nor each other's.
pub fn sheet_file_names(sheets: &[Sheet<'_>]) -> Vec<String> {
    let consoles = sheets.iter().filter_map(|sheet| match sheet.kind {
        SheetKind::Console(catalog) => Some(catalog.short_name()),
        _ => None,
    });
    let mut console_names = unique_names(consoles, &["overview", "all"], MAX_NAME_CHARS)
        .into_iter()
        .map(|name| format!("{name}.csv"));

    sheets
        .iter()
        .map(|sheet| match sheet.kind {
            SheetKind::Overview => OVERVIEW_FILE.to_string(),
            SheetKind::AllGames => ALL_FILE.to_string(),
            SheetKind::Console(_) => console_names.next().unwrap_or_default(),
        })
        .collect()
}

impl ReportWriter for CsvReport {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn write_report(
        &self,
        report: &LibraryReport,
        output: &Path,
    ) -> Result<Vec<PathBuf>, ReportError> {
        if output.exists() && !output.is_dir() {
            return Err(ReportError::NotADirectory(output.to_path_buf()));
        }
        fs::create_dir_all(output)?;

        let sheets = layout(report);
        let names = sheet_file_names(&sheets);
        let mut written = Vec::with_capacity(sheets.len());

        for (sheet, name) in sheets.iter().zip(names) {
            let path = output.join(name);
            write_sheet(sheet, &path)?;
            log::info!("Wrote {} rows to {}", sheet.rows.len(), path.display());
            written.push(path);
        }

        Ok(written)
    }
}

fn write_sheet(sheet: &Sheet<'_>, path: &Path) -> Result<(), ReportError> {
    let mut wtr = WriterBuilder::new().flexible(true).from_path(path)?;
    wtr.write_record(&sheet.header)?;
    for row in &sheet.rows {
        wtr.write_record(row.iter().map(|cell| cell.to_text()))?;
    }
    wtr.write_record([""])?;
    for (label, value) in &sheet.totals {
        wtr.write_record([label.to_string(), value.to_text()])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/csv_report_tests.rs"]
mod tests;
