use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use game_archive_lib::LibraryReport;

use crate::layout::{Cell, Sheet, SheetKind, layout, unique_names};
use crate::{ReportError, ReportWriter};

pub const OVERVIEW_TAB: &str = "Library Overview";
pub const ALL_TAB: &str = "All";

/// Excel's limit on worksheet name length.
const MAX_TAB_CHARS: usize = 31;

/// Blank rows between the data and the totals block.
const TOTALS_GAP: u32 = 2;

const TAB_COLORS: [u32; 6] = [0x1F77B4, 0xD62728, 0x9467BD, 0x8C564B, 0xE377C2, 0x17BECF];

/// Writes a report as a single `.xlsx` workbook: a "Library Overview" tab,
/// one tab per console named after the console, then an "All" tab.
#[derive(Debug, Default)]
pub struct XlsxWorkbook;

impl XlsxWorkbook {
    pub fn new() -> Self {
        Self
    }
}

/// Tab names for each sheet, in layout order. Console tabs are cut to
/// Excel's length limit and never reuse another tab's name.
pub fn tab_names(sheets: &[Sheet<'_>]) -> Vec<String> {
    let consoles = sheets.iter().filter_map(|sheet| match sheet.kind {
        SheetKind::Console(catalog) => Some(catalog.definition.name.as_str()),
        _ => None,
    });
    // "History" is reserved by Excel.
    let mut console_names =
        unique_names(consoles, &[OVERVIEW_TAB, ALL_TAB, "History"], MAX_TAB_CHARS).into_iter();

    sheets
        .iter()
        .map(|sheet| match sheet.kind {
            SheetKind::Overview => OVERVIEW_TAB.to_string(),
            SheetKind::AllGames => ALL_TAB.to_string(),
            SheetKind::Console(_) => console_names.next().unwrap_or_default(),
        })
        .collect()
}

fn tab_color(kind: SheetKind<'_>, index: usize) -> Color {
    match kind {
        SheetKind::Overview => Color::Green,
        _ => Color::RGB(TAB_COLORS[index % TAB_COLORS.len()]),
    }
}

fn column_widths(kind: SheetKind<'_>) -> &'static [(u16, f64)] {
    match kind {
        SheetKind::Overview => &[(0, 20.0), (1, 10.0), (2, 10.0), (4, 10.0), (5, 60.0)],
        SheetKind::Console(_) => &[(0, 50.0), (3, 80.0)],
        SheetKind::AllGames => &[(0, 14.0), (1, 50.0), (4, 80.0)],
    }
}

fn write_cell(ws: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<(), ReportError> {
    match cell {
        Cell::Text(s) if s.is_empty() => {}
        Cell::Text(s) => {
            ws.write_string(row, col, s)?;
        }
        Cell::Count(n) => {
            ws.write_number(row, col, *n as f64)?;
        }
    }
    Ok(())
}

fn build_worksheet(sheet: &Sheet<'_>, name: &str, color: Color) -> Result<Worksheet, ReportError> {
    let accent = Format::new()
        .set_bold()
        .set_background_color(color)
        .set_font_color(Color::White);

    let mut ws = Worksheet::new();
    ws.set_name(name)?;
    ws.set_tab_color(color);
    for &(col, width) in column_widths(sheet.kind) {
        ws.set_column_width(col, width)?;
    }

    for (col, title) in sheet.header.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *title, &accent)?;
    }

    let mut row = 1u32;
    for cells in &sheet.rows {
        for (col, cell) in cells.iter().enumerate() {
            write_cell(&mut ws, row, col as u16, cell)?;
        }
        row += 1;
    }

    row += TOTALS_GAP;
    for (label, value) in &sheet.totals {
        ws.write_string_with_format(row, 0, *label, &accent)?;
        write_cell(&mut ws, row, 1, value)?;
        row += 1;
    }

    Ok(ws)
}

impl ReportWriter for XlsxWorkbook {
    fn name(&self) -> &'static str {
        "XLSX"
    }

    fn write_report(
        &self,
        report: &LibraryReport,
        output: &Path,
    ) -> Result<Vec<PathBuf>, ReportError> {
        if output.is_dir() {
            return Err(ReportError::IsADirectory(output.to_path_buf()));
        }
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let sheets = layout(report);
        let names = tab_names(&sheets);

        let mut workbook = Workbook::new();
        for (index, (sheet, name)) in sheets.iter().zip(&names).enumerate() {
            let ws = build_worksheet(sheet, name, tab_color(sheet.kind, index))?;
            workbook.push_worksheet(ws);
            log::info!("Added {} rows to the '{}' worksheet", sheet.rows.len(), name);
        }

        workbook.save(output)?;
        log::info!("Wrote workbook to {}", output.display());
        Ok(vec![output.to_path_buf()])
    }
}

#[cfg(test)]
#[path = "tests/xlsx_tests.rs"]
mod tests;
