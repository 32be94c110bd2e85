//! Exclusion pattern handling for the tree copier.
//! Combines the built-in exclusion list with the optional `.kilnignore`
//! file of a template set, similar to .gitignore functionality.

use crate::constants::{DEFAULT_EXCLUDES, IGNORE_FILE};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

fn add_pattern(builder: &mut GlobSetBuilder, pattern: &str) -> Result<()> {
    let glob = Glob::new(pattern)
        .map_err(|e| Error::ConfigError(format!("invalid exclude pattern '{pattern}': {e}")))?;
    builder.add(glob);
    Ok(())
}

/// Builds a glob set from explicit patterns only.
pub fn build_excludes<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        add_pattern(&mut builder, pattern.as_ref())?;
    }
    builder.build().map_err(|e| Error::ConfigError(format!("exclude patterns failed: {e}")))
}

/// Builds the exclusion set for a template set directory.
///
/// # Notes
/// - The default exclusions are always present
/// - If `<template_set>/.kilnignore` exists, each non-blank line that is not
///   a `#` comment is added as a pattern, and the ignore file itself is excluded
/// - Invalid patterns result in a ConfigError
///
/// # Example
/// ```ignore
/// # Contents of .kilnignore:
/// **/*.log
/// coverage/**
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(template_set_root: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_EXCLUDES {
        add_pattern(&mut builder, pattern)?;
    }

    let ignore_path = template_set_root.as_ref().join(IGNORE_FILE);
    if let Ok(contents) = read_to_string(&ignore_path) {
        add_pattern(&mut builder, &format!("**/{IGNORE_FILE}"))?;
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            debug!("Exclude pattern from {IGNORE_FILE}: {line}");
            add_pattern(&mut builder, line)?;
        }
    } else {
        debug!("{} does not exist", ignore_path.display());
    }

    builder.build().map_err(|e| Error::ConfigError(format!("exclude patterns failed: {e}")))
}
