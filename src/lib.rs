pub mod config;
pub mod filesystem;
pub mod organize;
pub mod shot;
pub mod summary;
pub mod utils;

// Re-export commonly used types
pub use config::{read_config, ConfigError, OrganizerConfig};
pub use filesystem::{Filesystem, OsFilesystem, RelocationError};
pub use organize::{
    organize, organize_dir, Diagnostic, OrganizeError, OrganizeOptions, OrganizeReport, Relocation,
};
pub use shot::{
    match_shot, parse_shot_id, EntryKind, LedgerEntry, NamingError, ShotId, ShotMatch,
    SummaryLedger,
};
pub use summary::{latest_version, render_summary, write_summary};
