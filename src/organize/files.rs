use super::types::RunLog;
use super::RunContext;
use crate::filesystem::RelocationError;
use crate::shot::{match_shot, EntryKind, SummaryLedger};
use crate::utils::basename;
use std::path::{Path, PathBuf};
use tracing::debug;

fn relocate_file(ctx: &RunContext<'_>, file: &Path, ledger: &mut SummaryLedger, log: &mut RunLog) {
    let name = basename(file);
    let Some(shot) = match_shot(&name, ctx.output_dir, ledger) else {
        if ctx.config.is_ignored(&name) {
            debug!(file = %name, "Skipping ignored file");
        } else {
            log.misnamed(EntryKind::File, file);
        }
        return;
    };

    if !ctx.fs.exists(&shot.target_dir) {
        if let Err(source) = ctx.fs.create_dir_all(&shot.target_dir) {
            let error = RelocationError::Io {
                from: file.to_path_buf(),
                to: shot.target_dir.clone(),
                source,
            };
            log.failed("moving file", &shot.id, file, error);
            return;
        }
    }

    match ctx.fs.move_into(file, &shot.target_dir) {
        Ok(moved_to) => {
            // Files only ever contribute versions, never subfolders
            ledger.record_version(&shot.id, name);
            log.moved(&shot.id, file, &moved_to);
        }
        Err(error) => log.failed("moving file", &shot.id, file, error),
    }
}

/// Move every candidate file into its shot folder
pub(crate) fn relocate_files(
    ctx: &RunContext<'_>,
    files: &[PathBuf],
    ledger: &mut SummaryLedger,
    log: &mut RunLog,
) {
    for file in files {
        relocate_file(ctx, file, ledger, log);
    }
}
