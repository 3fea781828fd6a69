//! Campaign Creator - influencer campaign configuration wizard
//!
//! This library provides the pieces behind the `campaign-creator` binary:
//! - The campaign form model with keyword and category limits
//! - A three-step wizard controller gating forward navigation
//! - Static category and language catalogs
//! - Sample influencer recommendations for the results preview
//! - A Ratatui terminal UI driving the wizard

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en");

pub mod campaign;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod tui;

pub use campaign::{
    CampaignFormData, FormPatch, JsonFileSink, LogSink, SubmissionSink, WizardController,
    WizardStep,
};
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, ThemeVariant};
pub use error::{Error, Result};
pub use i18n::init_locale;
pub use tui::{TuiApp, TuiResult, display_summary};
