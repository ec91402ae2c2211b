use std::path::PathBuf;

use thiserror::Error;

/// Errors loading or validating the configuration file.
///
/// These are the only fatal errors in a run: without a console list there
/// is nothing to scan.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist
    #[error("Config file not found: {}", .0.display())]
    Missing(PathBuf),

    /// I/O error reading the config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or shape error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed fine but is unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Errors raised by a metadata provider.
///
/// The enricher never lets these escape: any provider error is recorded
/// as "no match" for the entry.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network or protocol failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request did not complete in time
    #[error("Request timed out")]
    Timeout,

    /// The service answered with a non-success status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be understood
    #[error("Malformed response: {0}")]
    Parse(String),
}
