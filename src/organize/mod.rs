//! Sorting of shot deliverables into per-shot folders.
//!
//! A run enumerates the `SHOT_*` entries directly under the input directory,
//! reconciles directories first and then relocates loose files, so a file can
//! land inside a folder that was renamed earlier in the same run. The summary
//! is written last from whatever the ledger holds at that point. Nothing is
//! rolled back when an individual entry fails.

mod directories;
mod files;
mod types;

pub use types::{Diagnostic, OrganizeError, OrganizeOptions, OrganizeReport, Relocation};

use crate::config::{read_config, OrganizerConfig};
use crate::filesystem::{Filesystem, OsFilesystem};
use crate::shot::SummaryLedger;
use crate::summary::write_summary;
use crate::utils::SHOT_GLOB;
use directories::reconcile_directories;
use files::relocate_files;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use types::RunLog;

/// Shared, read-only state for one run
pub(crate) struct RunContext<'a> {
    pub fs: &'a dyn Filesystem,
    pub output_dir: &'a Path,
    pub config: &'a OrganizerConfig,
}

fn root_access(path: &Path, source: io::Error) -> OrganizeError {
    OrganizeError::RootAccess {
        path: path.to_path_buf(),
        source,
    }
}

/// Organize a directory in place using the real filesystem
pub fn organize_dir(root: &Path) -> Result<OrganizeReport, OrganizeError> {
    let options = OrganizeOptions {
        input_dir: root.to_path_buf(),
        ..Default::default()
    };
    organize(&OsFilesystem::new(), &options)
}

/// Run the organizer.
///
/// Fails only when the input directory cannot be read, the config is
/// malformed, the output directory cannot be created or the summary cannot be
/// written. Per-entry problems end up in [`OrganizeReport::diagnostics`].
pub fn organize(
    fs: &dyn Filesystem,
    options: &OrganizeOptions,
) -> Result<OrganizeReport, OrganizeError> {
    let input_dir = options.input_dir.as_path();

    if !fs.is_dir(input_dir) {
        return Err(root_access(
            input_dir,
            io::Error::new(io::ErrorKind::NotFound, "not a directory"),
        ));
    }
    fs.list_dir(input_dir)
        .map_err(|source| root_access(input_dir, source))?;

    let config = match &options.config {
        Some(config) => config.clone(),
        None => read_config(input_dir)?.unwrap_or_default(),
    };

    let output_dir = options.output_dir.as_deref().unwrap_or(input_dir);
    if !fs.exists(output_dir) {
        fs.create_dir_all(output_dir)
            .map_err(|source| OrganizeError::OutputAccess {
                path: output_dir.to_path_buf(),
                source,
            })?;
    }

    let candidates = fs
        .glob(input_dir, SHOT_GLOB)
        .map_err(|source| root_access(input_dir, source))?;

    let (directories, files): (Vec<PathBuf>, Vec<PathBuf>) =
        candidates.into_iter().partition(|path| fs.is_dir(path));
    let files: Vec<PathBuf> = files.into_iter().filter(|path| fs.is_file(path)).collect();

    info!(
        input = %input_dir.display(),
        output = %output_dir.display(),
        directories = directories.len(),
        files = files.len(),
        "Organizing shots"
    );

    let ctx = RunContext {
        fs,
        output_dir,
        config: &config,
    };
    let mut ledger = SummaryLedger::new();
    let mut log = RunLog::default();

    reconcile_directories(&ctx, &directories, &mut ledger, &mut log);
    relocate_files(&ctx, &files, &mut ledger, &mut log);

    let summary_path = write_summary(fs, output_dir, &config.summary_file, &ledger).map_err(
        |source| OrganizeError::Summary {
            path: output_dir.join(&config.summary_file),
            source,
        },
    )?;

    info!(
        shots = ledger.len(),
        relocated = log.relocations.len(),
        diagnostics = log.diagnostics.len(),
        "Organizing complete"
    );

    Ok(OrganizeReport {
        ledger,
        relocations: log.relocations,
        diagnostics: log.diagnostics,
        summary_path,
    })
}
