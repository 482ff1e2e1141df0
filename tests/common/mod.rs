#![allow(dead_code)]

use shot_organizer::{Filesystem, OsFilesystem, RelocationError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Create a file (and its parent directories) with some content
pub fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, relative).expect("Failed to write file");
    path
}

/// Create an empty directory (and its parents)
pub fn mkdir(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(&path).expect("Failed to create dir");
    path
}

pub fn read_summary(dir: &Path) -> String {
    fs::read_to_string(dir.join("summary.txt")).expect("Summary should exist")
}

/// Real filesystem that refuses to move entries with the given basenames
pub struct FailingFs {
    inner: OsFilesystem,
    fail_for: Vec<String>,
}

impl FailingFs {
    pub fn new(fail_for: &[&str]) -> Self {
        Self {
            inner: OsFilesystem::new(),
            fail_for: fail_for.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn check(&self, from: &Path, to: &Path) -> Result<(), RelocationError> {
        let name = from
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if self.fail_for.contains(&name) {
            return Err(RelocationError::Io {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        Ok(())
    }
}

impl Filesystem for FailingFs {
    fn glob(&self, dir: &Path, pattern: &str) -> io::Result<Vec<PathBuf>> {
        self.inner.glob(dir, pattern)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.inner.create_dir_all(path)
    }

    fn list_dir(&self, dir: &Path) -> io::Result<Vec<String>> {
        self.inner.list_dir(dir)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), RelocationError> {
        self.check(from, to)?;
        self.inner.rename(from, to)
    }

    fn move_into(&self, from: &Path, dest_dir: &Path) -> Result<PathBuf, RelocationError> {
        self.check(from, dest_dir)?;
        self.inner.move_into(from, dest_dir)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.inner.write(path, contents)
    }
}
