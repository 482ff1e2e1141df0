//! Summary document rendering.
//!
//! The summary is a plain-text report derived entirely from the ledger at the
//! end of a run:
//!
//! ```text
//! Total Shots: 1
//!
//! SHOT_001
//! - Versions: 1
//! - Latest Version: SHOT_001_v01.mov
//! - Subfolders: None
//!
//! ```

use crate::filesystem::Filesystem;
use crate::shot::{LedgerEntry, SummaryLedger};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

const NONE_MARKER: &str = "None";

/// Find the "latest" version in a shot's version list.
///
/// With `n` recorded versions the latest is assumed to carry the token
/// `v{n:02}` (e.g. `v03`); the first descriptor containing it wins. This
/// relies on versions being numbered contiguously from 1 and is not
/// validated: a shot with `v01` and `v05` reports no latest version.
pub fn latest_version(versions: &[String]) -> Option<&str> {
    let token = format!("v{:02}", versions.len());
    versions
        .iter()
        .find(|version| version.contains(&token))
        .map(String::as_str)
}

fn render_entry(id: &str, entry: &LedgerEntry) -> String {
    let subfolders = if entry.subfolders.is_empty() {
        NONE_MARKER.to_string()
    } else {
        entry.subfolders.join(", ")
    };

    format!(
        "{}\n- Versions: {}\n- Latest Version: {}\n- Subfolders: {}\n\n",
        id,
        entry.versions.len(),
        latest_version(&entry.versions).unwrap_or(NONE_MARKER),
        subfolders
    )
}

/// Render the ledger, shots in ascending identifier order
pub fn render_summary(ledger: &SummaryLedger) -> String {
    let mut out = format!("Total Shots: {}\n\n", ledger.len());

    for (id, entry) in ledger.sorted() {
        out.push_str(&render_entry(id.as_str(), entry));
    }

    out
}

/// Render the ledger and write it to `dir/file_name`, replacing any previous summary
pub fn write_summary(
    fs: &dyn Filesystem,
    dir: &Path,
    file_name: &str,
    ledger: &SummaryLedger,
) -> io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs.write(&path, &render_summary(ledger))?;

    info!(path = %path.display(), shots = ledger.len(), "Wrote summary");
    Ok(path)
}
