//! Reconciliation of pre-existing shot directories.
//!
//! A directory at the root is handled in one of two ways:
//! 1. Legacy split layout: it has a `preview` and/or `final` child. The whole
//!    directory is renamed to the canonical shot folder, keeping its nested
//!    contents. The rename refuses an occupied destination.
//! 2. Flat version folder: no split children. The directory is treated as a
//!    single version and moved underneath the canonical shot folder.
//!
//! Ledger records for a directory are staged and only committed once its
//! move succeeded.

use super::types::RunLog;
use super::RunContext;
use crate::filesystem::RelocationError;
use crate::shot::{match_shot, EntryKind, LedgerEntry, ShotMatch, SummaryLedger};
use crate::utils::{basename, SPLIT_SUBFOLDERS};
use std::path::{Path, PathBuf};
use tracing::debug;

/// First entry of a directory listing in sorted order
fn first_entry(ctx: &RunContext<'_>, dir: &Path) -> Result<Option<String>, RelocationError> {
    let entries = ctx.fs.list_dir(dir).map_err(|source| RelocationError::Io {
        from: dir.to_path_buf(),
        to: dir.to_path_buf(),
        source,
    })?;
    Ok(entries.into_iter().next())
}

fn reconcile_split(
    ctx: &RunContext<'_>,
    dir: &Path,
    name: &str,
    shot: &ShotMatch,
    split: &[&str],
) -> Result<(LedgerEntry, PathBuf), RelocationError> {
    let mut staged = LedgerEntry::default();

    for subfolder in split {
        staged.subfolders.push(subfolder.to_string());
        if let Some(entry) = first_entry(ctx, &dir.join(subfolder))? {
            staged.versions.push(format!("{}/{}/{}", name, subfolder, entry));
        }
    }

    ctx.fs.rename(dir, &shot.target_dir)?;
    Ok((staged, shot.target_dir.clone()))
}

fn reconcile_flat(
    ctx: &RunContext<'_>,
    dir: &Path,
    name: &str,
    shot: &ShotMatch,
) -> Result<(LedgerEntry, PathBuf), RelocationError> {
    let mut staged = LedgerEntry::default();
    staged.subfolders.push(name.to_string());
    if let Some(entry) = first_entry(ctx, dir)? {
        staged.versions.push(format!("{}/{}", name, entry));
    }

    // Already the canonical folder; it cannot be moved into itself
    if dir == shot.target_dir {
        debug!(shot = %shot.id, "Flat directory is already canonical");
        return Ok((staged, dir.to_path_buf()));
    }

    if !ctx.fs.exists(&shot.target_dir) {
        ctx.fs
            .create_dir_all(&shot.target_dir)
            .map_err(|source| RelocationError::Io {
                from: dir.to_path_buf(),
                to: shot.target_dir.clone(),
                source,
            })?;
    }

    let moved_to = ctx.fs.move_into(dir, &shot.target_dir)?;
    Ok((staged, moved_to))
}

fn reconcile_directory(
    ctx: &RunContext<'_>,
    dir: &Path,
    ledger: &mut SummaryLedger,
    log: &mut RunLog,
) {
    let name = basename(dir);
    let Some(shot) = match_shot(&name, ctx.output_dir, ledger) else {
        log.misnamed(EntryKind::Directory, dir);
        return;
    };

    let split: Vec<&str> = SPLIT_SUBFOLDERS
        .iter()
        .copied()
        .filter(|subfolder| ctx.fs.is_dir(&dir.join(subfolder)))
        .collect();

    let (outcome, action) = if split.is_empty() {
        (reconcile_flat(ctx, dir, &name, &shot), "moving directory")
    } else {
        debug!(shot = %shot.id, subfolders = ?split, "Legacy split layout");
        (
            reconcile_split(ctx, dir, &name, &shot, &split),
            "renaming directory",
        )
    };

    match outcome {
        Ok((staged, moved_to)) => {
            ledger.commit(&shot.id, staged);
            log.moved(&shot.id, dir, &moved_to);
        }
        Err(error) => log.failed(action, &shot.id, dir, error),
    }
}

/// Reconcile every candidate directory. Failures are logged per directory and
/// never stop the loop.
pub(crate) fn reconcile_directories(
    ctx: &RunContext<'_>,
    directories: &[PathBuf],
    ledger: &mut SummaryLedger,
    log: &mut RunLog,
) {
    for dir in directories {
        reconcile_directory(ctx, dir, ledger, log);
    }
}
