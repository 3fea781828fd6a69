//! Submission hand-off and campaign files

use crate::campaign::form::CampaignFormData;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Receives the completed campaign form
pub trait SubmissionSink {
    fn submit(&mut self, form: &CampaignFormData) -> Result<()>;
}

/// Logs the snapshot and does nothing else
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, form: &CampaignFormData) -> Result<()> {
        let snapshot = serde_json::to_string(form)?;
        info!(%snapshot, "Campaign completed");
        Ok(())
    }
}

/// Logs the snapshot and writes it as pretty JSON to a file
#[derive(Debug)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubmissionSink for JsonFileSink {
    fn submit(&mut self, form: &CampaignFormData) -> Result<()> {
        LogSink.submit(form)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(form)?;
        fs::write(&self.path, content)
            .map_err(|e| Error::Submission(format!("{}: {}", self.path.display(), e)))?;

        info!(path = %self.path.display(), "Campaign snapshot written");
        Ok(())
    }
}

/// Load a campaign form from a JSON file
pub fn load_campaign_file<P: AsRef<Path>>(path: P) -> Result<CampaignFormData> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::CampaignFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| Error::CampaignFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_form() -> CampaignFormData {
        let mut form = CampaignFormData::default();
        form.objective = "Increase brand awareness".into();
        form.campaign_budget.amount = 50000.0;
        form.keywords.add("skincare");
        form.categories.toggle(3, true);
        form
    }

    #[test]
    fn test_json_file_sink_writes_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("campaign.json");

        let mut sink = JsonFileSink::new(&path);
        sink.submit(&sample_form()).unwrap();

        let loaded = load_campaign_file(&path).unwrap();
        assert_eq!(loaded, sample_form());
    }

    #[test]
    fn test_log_sink_accepts_form() {
        assert!(LogSink.submit(&sample_form()).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_campaign_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::CampaignFile { .. }));
    }

    #[test]
    fn test_load_invalid_keywords() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"keywords": ["a", "a"]}"#).unwrap();
        assert!(load_campaign_file(&path).is_err());
    }
}
