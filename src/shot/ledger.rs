use super::id::ShotId;
use std::collections::HashMap;

/// Versions and subfolders recorded for one shot, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerEntry {
    pub versions: Vec<String>,
    pub subfolders: Vec<String>,
}

impl LedgerEntry {
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty() && self.subfolders.is_empty()
    }
}

/// Per-run aggregation of everything relocated for each shot.
///
/// Entries are created on first sight of an identifier and never removed.
/// Iteration order is unspecified; use [`SummaryLedger::sorted`] when output
/// must be deterministic.
#[derive(Debug, Clone, Default)]
pub struct SummaryLedger {
    entries: HashMap<ShotId, LedgerEntry>,
}

impl SummaryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shot with empty lists if it is not already known
    pub fn register(&mut self, id: &ShotId) -> &mut LedgerEntry {
        self.entries.entry(id.clone()).or_default()
    }

    pub fn record_version(&mut self, id: &ShotId, version: String) {
        self.register(id).versions.push(version);
    }

    pub fn record_subfolder(&mut self, id: &ShotId, subfolder: String) {
        self.register(id).subfolders.push(subfolder);
    }

    /// Append a staged set of records to a shot, preserving their order
    pub fn commit(&mut self, id: &ShotId, staged: LedgerEntry) {
        let entry = self.register(id);
        entry.versions.extend(staged.versions);
        entry.subfolders.extend(staged.subfolders);
    }

    pub fn get(&self, id: &ShotId) -> Option<&LedgerEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by identifier
    pub fn sorted(&self) -> Vec<(&ShotId, &LedgerEntry)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot::parse_shot_id;

    fn id(s: &str) -> ShotId {
        parse_shot_id(s).unwrap()
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut ledger = SummaryLedger::new();
        ledger.register(&id("SHOT_001"));
        ledger.record_subfolder(&id("SHOT_001"), "preview".to_string());
        ledger.register(&id("SHOT_001"));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(&id("SHOT_001")).unwrap().subfolders, vec!["preview"]);
    }

    #[test]
    fn test_records_preserve_insertion_order() {
        let mut ledger = SummaryLedger::new();
        let shot = id("SHOT_002");
        ledger.record_version(&shot, "b".to_string());
        ledger.record_version(&shot, "a".to_string());
        ledger.record_version(&shot, "c".to_string());

        assert_eq!(ledger.get(&shot).unwrap().versions, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_commit_appends_after_existing() {
        let mut ledger = SummaryLedger::new();
        let shot = id("SHOT_003");
        ledger.record_version(&shot, "first".to_string());

        let staged = LedgerEntry {
            versions: vec!["second".to_string()],
            subfolders: vec!["final".to_string()],
        };
        ledger.commit(&shot, staged);

        let entry = ledger.get(&shot).unwrap();
        assert_eq!(entry.versions, vec!["first", "second"]);
        assert_eq!(entry.subfolders, vec!["final"]);
    }

    #[test]
    fn test_sorted_orders_by_identifier() {
        let mut ledger = SummaryLedger::new();
        for name in ["SHOT_010", "SHOT_002", "SHOT_100", "SHOT_001"] {
            ledger.register(&id(name));
        }

        let order: Vec<&str> = ledger.sorted().iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["SHOT_001", "SHOT_002", "SHOT_010", "SHOT_100"]);
    }
}
