use crate::config::ConfigError;
use crate::filesystem::RelocationError;
use crate::shot::{EntryKind, NamingError, ShotId, SummaryLedger};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort a run
#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("Cannot access root directory {}: {source}", .path.display())]
    RootAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create output directory {}: {source}", .path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write summary {}: {source}", .path.display())]
    Summary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A per-entry problem that was reported and skipped
#[derive(Error, Debug)]
pub enum Diagnostic {
    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error("Error relocating {} ({shot}): {error}", .path.display())]
    Relocation {
        shot: ShotId,
        path: PathBuf,
        #[source]
        error: RelocationError,
    },
}

/// A successful move of a root entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub shot: ShotId,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Options for a single organizer run
#[derive(Debug, Clone, Default)]
pub struct OrganizeOptions {
    /// Directory scanned for `SHOT_*` entries
    pub input_dir: PathBuf,
    /// Directory receiving the shot folders and the summary. Defaults to `input_dir`.
    pub output_dir: Option<PathBuf>,
    /// Overrides the config file in `input_dir` when set
    pub config: Option<crate::config::OrganizerConfig>,
}

/// Result of a run
#[derive(Debug, Default)]
pub struct OrganizeReport {
    pub ledger: SummaryLedger,
    pub relocations: Vec<Relocation>,
    pub diagnostics: Vec<Diagnostic>,
    pub summary_path: PathBuf,
}

impl OrganizeReport {
    /// True when every candidate entry was relocated without a diagnostic
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Relocations and diagnostics collected while processing entries
#[derive(Debug, Default)]
pub(crate) struct RunLog {
    pub relocations: Vec<Relocation>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunLog {
    pub fn misnamed(&mut self, kind: EntryKind, path: &Path) {
        let error = NamingError {
            kind,
            path: path.to_path_buf(),
        };
        warn!("{}", error);
        self.diagnostics.push(error.into());
    }

    pub fn failed(&mut self, action: &str, shot: &ShotId, path: &Path, error: RelocationError) {
        warn!(
            shot = %shot,
            path = %path.display(),
            error = %error,
            "Error {}",
            action
        );
        self.diagnostics.push(Diagnostic::Relocation {
            shot: shot.clone(),
            path: path.to_path_buf(),
            error,
        });
    }

    pub fn moved(&mut self, shot: &ShotId, from: &Path, to: &Path) {
        info!(
            shot = %shot,
            from = %from.display(),
            to = %to.display(),
            "Relocated"
        );
        self.relocations.push(Relocation {
            shot: shot.clone(),
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }
}
