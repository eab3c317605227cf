//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "jaspace.toml";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// File discovery configuration
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Which files to process
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Files, directories or glob patterns to scan
    pub paths: Vec<String>,

    /// Skip files whose path contains any of these substrings
    pub exclude: Vec<String>,

    /// File extensions to process, without the dot
    pub extensions: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            paths: vec![".".to_string()],
            exclude: vec!["externals".to_string()],
            extensions: vec!["cpp".to_string(), "h".to_string()],
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,

    /// Print per-line diffs even when applying changes
    pub show_diff: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_diff: false,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else `jaspace.toml` from the working directory if
    /// present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    log::info!("Using config file {}", fallback.display());
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self
            .discovery
            .extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(CliError::ConfigError("empty file extension".to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.discovery.paths, vec!["."]);
        assert_eq!(config.discovery.exclude, vec!["externals"]);
        assert_eq!(config.discovery.extensions, vec!["cpp", "h"]);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.show_diff);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
[discovery]
extensions = ["cc", "hpp"]

[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.discovery.extensions, vec!["cc", "hpp"]);
        // Unspecified keys keep their defaults
        assert_eq!(config.discovery.exclude, vec!["externals"]);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.show_diff);
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::from_toml("[discovery\npaths = 1").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliConfig::from_toml("[output]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn test_empty_extension_rejected() {
        let err = CliConfig::from_toml("[discovery]\nextensions = [\".\"]").unwrap_err();
        assert!(err.to_string().contains("empty file extension"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[performance]\nworker_threads = 3\n").unwrap();
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.performance.worker_threads, 3);
    }

    #[test]
    fn test_from_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/jaspace.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }
}
