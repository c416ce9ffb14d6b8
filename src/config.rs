//! Settings file support.
//!
//! ```toml
//! sample = "tree-set-with-comparator"
//! max_title_length = 4
//! format = "text"
//! color = true
//! ```
//!
//! Every field is optional. Command-line flags are applied on top of the
//! loaded values by the binary.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::samples::Sample;

pub const DEFAULT_MAX_TITLE_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Sample to run when none is named on the command line.
    pub sample: Option<Sample>,
    /// Longest title kept by the passing-map filter.
    pub max_title_length: usize,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sample: None,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// On-disk shape; `sample` stays a string so an unknown name gets its own error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    sample: Option<String>,
    max_title_length: Option<usize>,
    format: Option<OutputFormat>,
    color: Option<bool>,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile = toml::from_str(content)?;
        let defaults = Settings::default();

        let sample = file.sample.as_deref().map(str::parse::<Sample>).transpose()?;

        let settings = Settings {
            sample,
            max_title_length: file.max_title_length.unwrap_or(defaults.max_title_length),
            format: file.format.unwrap_or(defaults.format),
            color: file.color.unwrap_or(defaults.color),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_title_length == 0 {
            return Err(ConfigError::InvalidTitleLength);
        }
        Ok(())
    }

    /// The sample to run when the command line names none.
    pub fn default_sample(&self) -> Sample {
        self.sample.unwrap_or_default()
    }
}
