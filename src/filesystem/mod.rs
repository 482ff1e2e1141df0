//! Filesystem access used by the organizer.
//!
//! Everything that touches the disk goes through the [`Filesystem`] trait so
//! the reconciliation logic can be driven against a real directory tree or a
//! wrapper that injects failures.

mod os;

pub use os::OsFilesystem;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelocationError {
    #[error("Source not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("Cannot move {} into itself", .0.display())]
    IntoItself(PathBuf),

    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait Filesystem {
    /// Paths directly under `dir` whose names match `pattern`, sorted
    fn glob(&self, dir: &Path, pattern: &str) -> io::Result<Vec<PathBuf>>;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Sorted basenames of the direct children of `dir`
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Rename `from` to `to`. Fails if `to` is already occupied, unless it is
    /// `from` itself, in which case nothing happens.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), RelocationError>;

    /// Move `from` to `dest_dir/<basename>` and return the new path
    fn move_into(&self, from: &Path, dest_dir: &Path) -> Result<PathBuf, RelocationError>;

    /// Create or overwrite a text file
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}
