//! Recursive template tree copying.
//! Files are copied byte for byte and never rendered. Existing destination
//! files are kept.

use crate::error::Result;
use crate::writer::{copy_if_absent, Outcome};
use globset::GlobSet;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// What to copy and where.
#[derive(Debug, Clone)]
pub struct CopySpec {
    /// Directory whose whole content (`<source_root>/**/*`) is copied
    pub source_root: PathBuf,
    pub destination_root: PathBuf,
    /// Whether files and directories starting with `.` are copied
    pub include_dotfiles: bool,
    /// Matched against paths relative to `source_root`
    pub exclude_patterns: GlobSet,
}

fn is_dotfile(entry: &DirEntry) -> bool {
    entry.file_name().to_str().map(|s| s.starts_with('.')).unwrap_or(false)
}

/// Copies a single file, creating the destination's parent directories.
pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, dest)?;
    Ok(())
}

/// Copies every file under `spec.source_root` that is not excluded.
///
/// Traversal is sorted by file name so the same tree is always copied in the
/// same order. Excluded directories are not descended into. A destination
/// that already exists is left as is. A failure stops the copy and leaves
/// what was already written.
///
/// # Returns
/// * `Result<Vec<(PathBuf, Outcome)>>` - Destination paths in copy order with
///   whether each was created or skipped
///
/// # Errors
/// * `Error::IoError` if the source root does not exist or a read or write fails
pub fn copy_tree(spec: &CopySpec) -> Result<Vec<(PathBuf, Outcome)>> {
    let source_root = &spec.source_root;
    if !source_root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("template directory '{}' does not exist", source_root.display()),
        )
        .into());
    }

    let mut copied = Vec::new();
    let walker = WalkDir::new(source_root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if !spec.include_dotfiles && is_dotfile(entry) {
                return false;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            let excluded = entry
                .path()
                .strip_prefix(source_root)
                .map(|relative| spec.exclude_patterns.is_match(relative))
                .unwrap_or(false);
            if excluded {
                debug!("Skipping excluded directory {}", entry.path().display());
            }
            !excluded
        });

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(source_root)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        if spec.exclude_patterns.is_match(relative_path) {
            debug!("Skipping excluded file {}", relative_path.display());
            continue;
        }

        let target_path = spec.destination_root.join(relative_path);
        let outcome = copy_if_absent(entry.path(), &target_path)?;
        copied.push((target_path, outcome));
    }

    Ok(copied)
}
