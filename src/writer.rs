//! Conditional file writing.
//! A destination that already exists is never touched, which keeps repeated
//! runs against the same directory idempotent.

use crate::copier::copy_file;
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::Path;

/// Result of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    /// The destination existed and was left as is
    Skipped,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Created => write!(f, "create"),
            Outcome::Skipped => write!(f, "skip"),
        }
    }
}

/// True for any existing entry, including a dangling symlink.
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Renders `template_file` into `destination_file` unless the destination exists.
///
/// The template is fully rendered before anything is written, so a missing
/// context key leaves no file behind.
///
/// # Errors
/// * `Error::TemplateError` if the template references a key absent from `context`
/// * `Error::IoError` if the template cannot be read or the destination written
pub fn write_if_absent(
    renderer: &dyn TemplateRenderer,
    template_file: &Path,
    destination_file: &Path,
    context: &serde_json::Value,
) -> Result<Outcome> {
    if occupied(destination_file) {
        debug!("Skipping existing file: {}", destination_file.display());
        return Ok(Outcome::Skipped);
    }

    let template = fs::read_to_string(template_file)?;
    let content = renderer.render(&template, context)?;
    debug!("Writing file: {}", destination_file.display());
    write_file(destination_file, &content)?;
    Ok(Outcome::Created)
}

/// Copies `source_file` verbatim to `destination_file` unless the destination exists.
pub fn copy_if_absent(source_file: &Path, destination_file: &Path) -> Result<Outcome> {
    if occupied(destination_file) {
        debug!("Skipping existing file: {}", destination_file.display());
        return Ok(Outcome::Skipped);
    }

    debug!("Copying file: {}", destination_file.display());
    copy_file(source_file, destination_file)?;
    Ok(Outcome::Created)
}
