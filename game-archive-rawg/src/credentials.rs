use std::time::Duration;

use game_archive_lib::RawgConfig;

use crate::error::RawgError;

pub const ENV_ENABLED: &str = "RAWG_ENABLED";
pub const ENV_API_KEY: &str = "RAWG_API_KEY";
pub const ENV_TIMEOUT: &str = "RAWG_TIMEOUT_SECS";
pub const ENV_BASE_URL: &str = "RAWG_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for connecting to RAWG.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub base_url: String,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default value.
    Default,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each setting.
#[derive(Debug)]
pub struct CredentialSources {
    pub enabled: CredentialSource,
    pub api_key: CredentialSource,
    pub timeout: CredentialSource,
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl Credentials {
    /// Load settings from environment variables, falling back to the
    /// `[rawg]` table of the config file.
    pub fn load(file: Option<&RawgConfig>) -> Self {
        Self::load_with(env_var, file)
    }

    /// Same as [`Credentials::load`] with an explicit environment lookup.
    pub fn load_with(env: impl Fn(&str) -> Option<String>, file: Option<&RawgConfig>) -> Self {
        let enabled = env(ENV_ENABLED)
            .map(|v| parse_bool(&v))
            .or_else(|| file.and_then(|f| f.enabled))
            .unwrap_or(false);

        let api_key = env(ENV_API_KEY).or_else(|| file.and_then(|f| f.api_key.clone()));

        let timeout = env(ENV_TIMEOUT)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .or_else(|| file.and_then(|f| f.timeout_secs))
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        let base_url = env(ENV_BASE_URL)
            .or_else(|| file.and_then(|f| f.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            enabled,
            api_key,
            timeout,
            base_url,
        }
    }

    /// The API key, required once enrichment is enabled.
    pub fn require_key(&self) -> Result<&str, RawgError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                RawgError::Config(format!(
                    "Missing API key. Set {ENV_API_KEY} env var or add api_key to the [rawg] config table"
                ))
            })
    }
}

/// Determine where each setting is coming from.
pub fn credential_sources(file: Option<&RawgConfig>) -> CredentialSources {
    let enabled = if env_var(ENV_ENABLED).is_some() {
        CredentialSource::EnvVar(ENV_ENABLED)
    } else if file.and_then(|f| f.enabled).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Default
    };

    let api_key = if env_var(ENV_API_KEY).is_some() {
        CredentialSource::EnvVar(ENV_API_KEY)
    } else if file.and_then(|f| f.api_key.as_ref()).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    };

    let timeout = if env_var(ENV_TIMEOUT).is_some() {
        CredentialSource::EnvVar(ENV_TIMEOUT)
    } else if file.and_then(|f| f.timeout_secs).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Default
    };

    CredentialSources {
        enabled,
        api_key,
        timeout,
    }
}

#[cfg(test)]
#[path = "tests/credentials_tests.rs"]
mod tests;
