//! Error types for the campaign creator

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for campaign creator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the campaign creator
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid campaign form: {0}")]
    InvalidForm(String),

    #[error("Failed to read campaign file {path}: {message}")]
    CampaignFile { path: PathBuf, message: String },

    #[error("Campaign can only be completed from the results step")]
    NotAtTerminalStep,

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
