use thiserror::Error;

use game_archive_lib::ConfigError;
use game_archive_report::ReportError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Config file missing or invalid
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A console named on the command line is not configured
    #[error("Unknown console: {0}")]
    UnknownConsole(String),

    /// The report could not be written
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl CliError {
    pub(crate) fn unknown_console(msg: impl Into<String>) -> Self {
        Self::UnknownConsole(msg.into())
    }
}
