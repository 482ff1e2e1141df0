use super::{Filesystem, RelocationError};
use glob::Pattern;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// [`Filesystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl OsFilesystem {
    pub fn new() -> Self {
        Self
    }
}

/// `symlink_metadata` based existence check, so dangling links still count
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copy a file or a whole tree, used when a rename crosses devices
fn copy_recursive(from: &Path, to: &Path) -> io::Result<()> {
    if !from.is_dir() {
        fs::copy(from, to)?;
        return Ok(());
    }

    for entry in WalkDir::new(from) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

fn remove_recursive(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    copy_recursive(from, to)?;
    remove_recursive(from)
}

/// `fs::rename`, falling back to copy + remove when `to` is on another device
fn rename_across_devices(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(from = %from.display(), to = %to.display(), "Copying across devices");
            copy_then_remove(from, to)
        }
        result => result,
    }
}

impl Filesystem for OsFilesystem {
    fn glob(&self, dir: &Path, pattern: &str) -> io::Result<Vec<PathBuf>> {
        let escaped = Pattern::escape(&dir.to_string_lossy());
        let full_pattern = format!("{}/{}", escaped.trim_end_matches('/'), pattern);

        let paths = glob::glob(&full_pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let mut matched = Vec::new();
        for path in paths {
            matched.push(path.map_err(io::Error::from)?);
        }
        matched.sort();
        Ok(matched)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn exists(&self, path: &Path) -> bool {
        occupied(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn list_dir(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }

        Ok(names)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), RelocationError> {
        if !occupied(from) {
            return Err(RelocationError::SourceMissing(from.to_path_buf()));
        }

        if occupied(to) {
            if same_path(from, to) {
                debug!(path = %from.display(), "Rename onto itself, nothing to do");
                return Ok(());
            }
            return Err(RelocationError::DestinationExists(to.to_path_buf()));
        }

        rename_across_devices(from, to).map_err(|source| RelocationError::Io {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }

    fn move_into(&self, from: &Path, dest_dir: &Path) -> Result<PathBuf, RelocationError> {
        let name = from
            .file_name()
            .ok_or_else(|| RelocationError::SourceMissing(from.to_path_buf()))?;

        if !occupied(from) {
            return Err(RelocationError::SourceMissing(from.to_path_buf()));
        }

        if dest_dir.starts_with(from) || same_path(from, dest_dir) {
            return Err(RelocationError::IntoItself(from.to_path_buf()));
        }

        let target = dest_dir.join(name);
        if occupied(&target) {
            return Err(RelocationError::DestinationExists(target));
        }

        match rename_across_devices(from, &target) {
            Ok(()) => Ok(target),
            Err(source) => Err(RelocationError::Io {
                from: from.to_path_buf(),
                to: target,
                source,
            }),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
