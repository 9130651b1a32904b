//! Export settings, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

/// What the game log writer emits and how the pair sampler draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Write a header line before the first line of each schema.
    pub write_headers: bool,
    /// Write the board dimensions and hex grid.
    pub include_board: bool,
    pub include_attacks: bool,
    /// Write static unit attributes once per unit.
    pub include_enrichment: bool,
    /// Pairs drawn by the sampler.
    pub batch_size: usize,
    /// Sampler seed; 0 means seed from entropy.
    pub seed: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            write_headers: true,
            include_board: true,
            include_attacks: true,
            include_enrichment: true,
            batch_size: 32,
            seed: 0,
        }
    }
}

impl ExportConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ExportConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::Validation("batch_size must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ExportConfig::from_toml("include_board = false\nseed = 9\n").unwrap();
        assert!(!config.include_board);
        assert_eq!(config.seed, 9);
        assert!(config.write_headers);
        assert_eq!(config.batch_size, 32);
    }

    #[test]
    fn zero_batch_is_rejected() {
        let err = ExportConfig::from_toml("batch_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = ExportConfig::from_toml("batch_size = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ExportConfig::load(Path::new("/nonexistent/export.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/export.toml"));
    }
}
