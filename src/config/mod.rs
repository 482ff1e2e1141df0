use crate::utils::{current_exe_name, get_config_path, SUMMARY_FILE};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

fn default_summary_file() -> String {
    SUMMARY_FILE.to_string()
}

/// Organizer configuration, read from `.shot-organizer.json` in the input directory
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerConfig {
    /// Name of the summary document written to the output directory
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
    /// Basenames that are skipped without a diagnostic when they fail to
    /// match the shot pattern
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            summary_file: default_summary_file(),
            ignore: Vec::new(),
        }
    }
}

impl OrganizerConfig {
    /// Whether an unmatched entry should be skipped silently.
    /// The running executable always is.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == name)
            || current_exe_name().is_some_and(|exe| exe == name)
    }
}

/// Read the configuration file
pub fn read_config(input_dir: &Path) -> Result<Option<OrganizerConfig>, ConfigError> {
    let config_path = get_config_path(input_dir);

    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path)?;
    let config: OrganizerConfig = serde_json::from_str(&content)?;
    Ok(Some(config))
}
