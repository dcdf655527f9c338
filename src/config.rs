//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::error::{Error, Result};
use crate::export::GraphFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `-f` is not given
    #[serde(default)]
    pub format: GraphFormat,

    /// File stem used when `-o` is not given
    #[serde(default = "default_output_stem")]
    pub stem: String,
}

/// How diagnostics affect the run
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DiagnosticsConfig {
    /// Exit with an error if any diagnostic was reported
    #[serde(default)]
    pub strict: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_output_stem() -> String {
    "out".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: GraphFormat::default(),
            stem: default_output_stem(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./sia2graph.toml
    /// 2. ~/.sia2graph/config.toml
    /// 3. /etc/sia2graph/config.toml
    ///
    /// Returns the file that was read, if any. Logging is not initialized
    /// yet when this runs, so reporting the source is left to the caller.
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        let mut paths = vec![PathBuf::from("sia2graph.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".sia2graph").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/sia2graph/config.toml"));

        Self::load_first(&paths)
    }

    /// Load the first existing file in `paths`, or defaults if none exists
    pub fn load_first(paths: &[PathBuf]) -> Result<(Self, Option<PathBuf>)> {
        match paths.iter().find(|p| p.exists()) {
            Some(path) => Ok((Self::from_file(path)?, Some(path.clone()))),
            None => Ok((Config::default(), None)),
        }
    }

    /// Output path used when none is given on the command line
    pub fn default_output_path(&self, format: GraphFormat) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.output.stem, format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, GraphFormat::Graphml);
        assert!(!config.diagnostics.strict);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(
            config.default_output_path(GraphFormat::Gml),
            PathBuf::from("out.gml")
        );
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[output]
format = "gml"
stem = "automaton"

[diagnostics]
strict = true

[logging]
level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.format, GraphFormat::Gml);
        assert_eq!(config.output.stem, "automaton");
        assert!(config.diagnostics.strict);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sia2graph.toml");
        std::fs::write(&path, "[output\nformat = 1").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_first_reports_source() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = dir.path().join("sia2graph.toml");
        std::fs::write(&present, "[output]\nstem = \"fsm\"\n").unwrap();

        let (config, source) = Config::load_first(&[missing.clone(), present.clone()]).unwrap();
        assert_eq!(config.output.stem, "fsm");
        assert_eq!(source, Some(present));

        let (config, source) = Config::load_first(&[missing]).unwrap();
        assert_eq!(config.output.stem, "out");
        assert_eq!(source, None);
    }
}
