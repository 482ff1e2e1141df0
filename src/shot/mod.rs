mod id;
mod ledger;

pub use id::{match_shot, parse_shot_id, EntryKind, NamingError, ShotId, ShotMatch};
pub use ledger::{LedgerEntry, SummaryLedger};
