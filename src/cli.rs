//! CLI argument parsing with clap

use crate::campaign::Currency;
use crate::config::{AppConfig, ThemeVariant};
use clap::Parser;
use std::path::PathBuf;

/// Campaign Creator - influencer campaign configuration wizard
///
/// Without arguments the interactive terminal wizard starts. The other
/// options look up reference data or check an existing campaign file.
#[derive(Parser, Debug, Default)]
#[command(name = "campaign-creator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// CLI arguments override config file settings.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Print the category catalog, optionally filtered by a search term
    #[arg(long, value_name = "QUERY", num_args = 0..=1, default_missing_value = "")]
    pub categories: Option<String>,

    /// Check a campaign JSON file against the wizard's step requirements
    #[arg(long, value_name = "FILE")]
    pub check: Option<PathBuf>,

    /// Write the effective configuration (file plus CLI overrides) to PATH
    #[arg(long, value_name = "PATH")]
    pub save_config: Option<PathBuf>,

    /// Print a commented sample configuration file
    #[arg(long)]
    pub sample_config: bool,

    /// Start the interactive wizard even when other options are given
    #[arg(short, long)]
    pub interactive: bool,

    /// Write the completed campaign snapshot to this JSON file
    #[arg(long, value_name = "PATH")]
    pub submit_file: Option<PathBuf>,

    /// Currency preselected for new campaigns
    #[arg(long, value_enum)]
    pub currency: Option<Currency>,

    /// Terminal color scheme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeVariant>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Get config file name (without extension) for log naming
    pub fn config_name(&self) -> Option<String> {
        self.config.as_ref().and_then(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
    }

    /// Whether the terminal wizard should run
    pub fn wants_interactive(&self) -> bool {
        self.interactive
            || (self.categories.is_none()
                && self.check.is_none()
                && self.save_config.is_none()
                && !self.sample_config)
    }

    /// Merge CLI arguments with config from file.
    /// CLI arguments take precedence over config file settings.
    pub fn merge_with_config(&self, mut config: AppConfig) -> AppConfig {
        if let Some(ref submit_file) = self.submit_file {
            config.submit_file = Some(submit_file.clone());
        }
        if let Some(currency) = self.currency {
            config.default_currency = currency;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        config
    }

    /// Convert CLI arguments to a config (when no config file is used)
    pub fn to_config(&self) -> AppConfig {
        self.merge_with_config(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_interactive() {
        let cli = Cli::try_parse_from(["campaign-creator"]).unwrap();
        assert!(cli.wants_interactive());
    }

    #[test]
    fn test_categories_without_query() {
        let cli = Cli::try_parse_from(["campaign-creator", "--categories"]).unwrap();
        assert_eq!(cli.categories.as_deref(), Some(""));
        assert!(!cli.wants_interactive());

        let cli = Cli::try_parse_from(["campaign-creator", "--categories", "sport"]).unwrap();
        assert_eq!(cli.categories.as_deref(), Some("sport"));
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from([
            "campaign-creator",
            "--currency",
            "USD",
            "--theme",
            "light",
            "--submit-file",
            "out.json",
        ])
        .unwrap();
        let config = cli.merge_with_config(AppConfig {
            default_currency: Currency::Eur,
            ..Default::default()
        });
        assert_eq!(config.default_currency, Currency::Usd);
        assert_eq!(config.theme, ThemeVariant::Light);
        assert_eq!(config.submit_file, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_config_commands_are_not_interactive() {
        let cli = Cli::try_parse_from(["campaign-creator", "--sample-config"]).unwrap();
        assert!(!cli.wants_interactive());

        let cli =
            Cli::try_parse_from(["campaign-creator", "--save-config", "a.toml", "-i"]).unwrap();
        assert!(cli.wants_interactive());
    }

    #[test]
    fn test_config_name() {
        let cli = Cli::try_parse_from(["campaign-creator", "-C", "Config/team.toml"]).unwrap();
        assert_eq!(cli.config_name().as_deref(), Some("team"));
    }
}
