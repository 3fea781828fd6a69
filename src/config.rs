//! Application configuration

use crate::campaign::Currency;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Color scheme of the terminal UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Light text on a black background
    #[default]
    Dark,
    /// Dark text on a white background
    Light,
}

/// Configuration for the campaign creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory for log files (relative paths resolve against the executable directory)
    pub log_dir: PathBuf,

    /// Where the completed campaign snapshot is written; log only when unset
    pub submit_file: Option<PathBuf>,

    /// Currency preselected for new campaigns
    pub default_currency: Currency,

    /// Terminal UI color scheme
    pub theme: ThemeVariant,

    /// UI locale override, e.g. "en" or "zh-CN"; system locale when unset
    pub locale: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("Log"),
            submit_file: None,
            default_currency: Currency::default(),
            theme: ThemeVariant::default(),
            locale: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError { source: e })?;

        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Resolve the log directory against `base` when it is relative
    pub fn resolved_log_dir(&self, base: &Path) -> PathBuf {
        if self.log_dir.is_absolute() {
            self.log_dir.clone()
        } else {
            base.join(&self.log_dir)
        }
    }

    /// Generate a sample configuration file content
    pub fn sample_config() -> String {
        r#"# Campaign Creator Configuration File
# This file uses TOML format (https://toml.io)

# Directory for log files, relative to the executable unless absolute
log_dir = "Log"

# Where the completed campaign is written as JSON.
# Leave unset to only record the campaign in the log.
# submit_file = "campaigns/latest.json"

# Currency preselected for new campaigns: "INR", "USD", "EUR" or "GBP"
default_currency = "INR"

# Terminal color scheme: "dark" or "light"
theme = "dark"

# UI language override: "en" or "zh-CN". Uses the system locale when unset.
# locale = "en"
"#
        .to_string()
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse configuration file
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to write configuration file
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to serialize configuration
    SerializeError { source: toml::ser::Error },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
            ConfigError::WriteError { path, source } => {
                write!(f, "Failed to write config file '{}': {}", path.display(), source)
            }
            ConfigError::SerializeError { source } => {
                write!(f, "Failed to serialize config: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::WriteError { source, .. } => Some(source),
            ConfigError::SerializeError { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sample_config_parses() {
        let config: AppConfig = toml::from_str(&AppConfig::sample_config()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Config").join("team.toml");

        let config = AppConfig {
            submit_file: Some(PathBuf::from("out/campaign.json")),
            default_currency: Currency::Eur,
            theme: ThemeVariant::Light,
            locale: Some("zh-CN".into()),
            ..Default::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(config.theme, ThemeVariant::Light);
        assert_eq!(config.default_currency, Currency::Inr);
        assert_eq!(config.log_dir, PathBuf::from("Log"));
    }

    #[test]
    fn test_parse_error_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "theme = 42").unwrap();

        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_resolved_log_dir() {
        let config = AppConfig::default();
        assert_eq!(
            config.resolved_log_dir(Path::new("/opt/app")),
            PathBuf::from("/opt/app/Log")
        );
    }
}
