use game_archive_lib::ProviderError;

/// Errors that can occur talking to the RAWG API.
#[derive(Debug, thiserror::Error)]
pub enum RawgError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned HTTP {status}")]
    Status { status: u16 },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<RawgError> for ProviderError {
    fn from(err: RawgError) -> Self {
        match err {
            RawgError::Http(e) if e.is_timeout() => ProviderError::Timeout,
            RawgError::Http(e) => ProviderError::Transport(e.to_string()),
            RawgError::Status { status } => ProviderError::Status(status),
            RawgError::Json(e) => ProviderError::Parse(e.to_string()),
            RawgError::Config(msg) => ProviderError::Transport(msg),
        }
    }
}
