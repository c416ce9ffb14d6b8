use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while narrating a sample.
///
/// Container lookups themselves return `Option`; a sample only turns a `None`
/// into `MissingKey` when its own literal data promised the key was there.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Sample expected key '{key}' to be present")]
    MissingKey { key: String },

    #[error("Failed to render transcript: {0}")]
    Render(#[from] serde_json::Error),
}

impl SampleError {
    pub fn missing_key(key: impl ToString) -> Self {
        Self::MissingKey {
            key: key.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown sample '{0}' (run with --list to see the sample names)")]
    UnknownSample(String),

    #[error("max_title_length must be greater than zero")]
    InvalidTitleLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let err = SampleError::missing_key("Anne");
        assert_eq!(err.to_string(), "Sample expected key 'Anne' to be present");
    }

    #[test]
    fn test_unknown_sample_message() {
        let err = ConfigError::UnknownSample("map9".into());
        assert!(err.to_string().contains("map9"));
        assert!(err.to_string().contains("--list"));
    }
}
