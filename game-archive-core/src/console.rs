//! Console definitions as provided by the configuration file.

use serde::Deserialize;

use crate::error::ScanError;

/// Format token meaning "each immediate subdirectory is one game".
pub const FOLDER_FORMAT: &str = "folder";

/// A console to look for under the ROM root.
///
/// Field aliases accept the camelCase keys used by older JSON configs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsoleDefinition {
    /// Full console name (e.g., "Super Nintendo Entertainment System")
    pub name: String,
    /// Short name, also the folder name searched for (e.g., "snes")
    #[serde(alias = "shortName")]
    pub short_name: String,
    /// Manufacturer
    pub company: String,
    /// Accepted extension tokens (".sfc") or the `folder` sentinel
    #[serde(alias = "romFormats", default)]
    pub rom_formats: Vec<String>,
}

impl ConsoleDefinition {
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        company: impl Into<String>,
        rom_formats: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            company: company.into(),
            rom_formats: rom_formats.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Parse configured format tokens, preserving their order. The first
/// unusable token fails the whole list.
pub fn parse_rom_formats(tokens: &[String]) -> Result<Vec<RomFormat>, ScanError> {
    tokens.iter().map(|f| f.parse()).collect()
}

/// A parsed ROM format token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RomFormat {
    /// Games are whole directories
    Folder,
    /// Games are files whose name ends with this suffix (e.g., ".zip")
    Extension(String),
}

impl RomFormat {
    /// Case-insensitive (ASCII) suffix match against a file name.
    ///
    /// `Folder` never matches a file.
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        match self {
            RomFormat::Folder => false,
            RomFormat::Extension(suffix) => {
                let name = file_name.as_bytes();
                let suffix = suffix.as_bytes();
                name.len() >= suffix.len()
                    && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
            }
        }
    }
}

impl std::str::FromStr for RomFormat {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == FOLDER_FORMAT {
            return Ok(RomFormat::Folder);
        }
        if s.trim().is_empty() || s.trim() == "." {
            return Err(ScanError::malformed_format(format!(
                "'{s}' is not a usable extension"
            )));
        }
        Ok(RomFormat::Extension(s.to_string()))
    }
}

impl std::fmt::Display for RomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RomFormat::Folder => write!(f, "{FOLDER_FORMAT}"),
            RomFormat::Extension(ext) => write!(f, "{ext}"),
        }
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
