//! Shot identifier matching.
//!
//! Entry names at the root are classified by a fixed prefix: `SHOT_` followed
//! by three digits. Anything after the prefix (version suffixes, take names,
//! extensions) is ignored, so `SHOT_001_v02.mov` and `SHOT_001_takeA` both
//! resolve to the `SHOT_001` folder.

use super::ledger::SummaryLedger;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

static SHOT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^SHOT_[0-9]{3}").expect("SHOT_PATTERN should be a valid regex"));

/// Identifier of a shot, e.g. `SHOT_042`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShotId(String);

impl ShotId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShotId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kind of root entry, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => f.write_str("File"),
            EntryKind::Directory => f.write_str("Directory"),
        }
    }
}

/// An entry at the root whose name does not carry a shot identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} {} is not named correctly", .path.display())]
pub struct NamingError {
    pub kind: EntryKind,
    pub path: PathBuf,
}

/// A successful match: the identifier and its canonical folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotMatch {
    pub id: ShotId,
    pub target_dir: PathBuf,
}

/// Extract the shot identifier from a basename, without touching any ledger
pub fn parse_shot_id(name: &str) -> Option<ShotId> {
    SHOT_PATTERN
        .find(name)
        .map(|m| ShotId(m.as_str().to_string()))
}

/// Resolve a basename to its canonical shot folder under `root`.
///
/// On a match the identifier is registered in the ledger (a no-op if it is
/// already present). Returns `None` when the name does not match; reporting
/// that is up to the caller.
pub fn match_shot(name: &str, root: &Path, ledger: &mut SummaryLedger) -> Option<ShotMatch> {
    let id = parse_shot_id(name)?;
    ledger.register(&id);

    Some(ShotMatch {
        target_dir: root.join(id.as_str()),
        id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shot_id_valid() {
        assert_eq!(parse_shot_id("SHOT_001").unwrap().as_str(), "SHOT_001");
        assert_eq!(parse_shot_id("SHOT_001_v01.mov").unwrap().as_str(), "SHOT_001");
        assert_eq!(parse_shot_id("SHOT_999_takeA").unwrap().as_str(), "SHOT_999");
    }

    #[test]
    fn test_parse_shot_id_takes_first_three_digits() {
        // Only the prefix is matched; a fourth digit belongs to the suffix
        assert_eq!(parse_shot_id("SHOT_0012.mov").unwrap().as_str(), "SHOT_001");
    }

    #[test]
    fn test_parse_shot_id_invalid() {
        assert!(parse_shot_id("notashot.txt").is_none());
        assert!(parse_shot_id("SHOT_01").is_none()); // too few digits
        assert!(parse_shot_id("SHOT_ab1").is_none());
        assert!(parse_shot_id("shot_001").is_none()); // case-sensitive
        assert!(parse_shot_id("xSHOT_001").is_none()); // anchored
        assert!(parse_shot_id("SHOT_").is_none());
        assert!(parse_shot_id("").is_none());
    }

    #[test]
    fn test_match_shot_registers_once() {
        let mut ledger = SummaryLedger::new();
        let root = Path::new("/root_dir");

        let first = match_shot("SHOT_007_v01.mov", root, &mut ledger).unwrap();
        assert_eq!(first.id.as_str(), "SHOT_007");
        assert_eq!(first.target_dir, root.join("SHOT_007"));

        ledger.record_version(&first.id, "SHOT_007_v01.mov".to_string());
        let second = match_shot("SHOT_007_v02.mov", root, &mut ledger).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(ledger.len(), 1);
        // Re-registering must not reset the recorded versions
        assert_eq!(ledger.get(&second.id).unwrap().versions.len(), 1);
    }

    #[test]
    fn test_match_shot_no_match_leaves_ledger_empty() {
        let mut ledger = SummaryLedger::new();
        assert!(match_shot("notashot.txt", Path::new("/r"), &mut ledger).is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_naming_error_message() {
        let err = NamingError {
            kind: EntryKind::Directory,
            path: PathBuf::from("/r/SHOT_x"),
        };
        assert_eq!(err.to_string(), "Directory /r/SHOT_x is not named correctly");
    }
}
