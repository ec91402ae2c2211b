use std::path::PathBuf;

/// Errors that can occur while writing a library report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX writing error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Output path {} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Output path {} is a directory, expected a workbook file", .0.display())]
    IsADirectory(PathBuf),
}
