//! Template sets and their selection.
//! Both template sets are loaded once at startup into a [`TemplateRegistry`]
//! and only read afterwards.

use crate::constants::PACKAGE_MANIFEST;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Language flavor of a template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Javascript,
    Typescript,
}

impl Language {
    /// Normalizes the two typescript alias flags into a single flavor.
    /// Presence of either flag selects typescript.
    pub fn from_flags(typescript: bool, ts: bool) -> Self {
        if typescript || ts {
            Language::Typescript
        } else {
            Language::Javascript
        }
    }

    /// Directory of the template set under the template root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Javascript => write!(f, "Javascript"),
            Language::Typescript => write!(f, "Typescript"),
        }
    }
}

/// Dependency tables of a template set's `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageDescriptor {
    /// Reads the descriptor, ignoring every key other than the dependency tables.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            Error::ConfigError(format!("Invalid package descriptor '{}': {e}", path.display()))
        })
    }
}

#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub name: Language,
    pub root_path: PathBuf,
    pub package_descriptor: PackageDescriptor,
}

impl TemplateSet {
    pub fn load<P: AsRef<Path>>(templates_root: P, name: Language) -> Result<Self> {
        let root_path = templates_root.as_ref().join(name.dir_name());
        if !root_path.is_dir() {
            return Err(Error::ConfigError(format!(
                "Template set '{}' not found at '{}'",
                name,
                root_path.display()
            )));
        }
        let package_descriptor = PackageDescriptor::load(root_path.join(PACKAGE_MANIFEST))?;
        debug!(
            "Loaded {} template set from '{}' ({} dependencies, {} devDependencies)",
            name,
            root_path.display(),
            package_descriptor.dependencies.len(),
            package_descriptor.dev_dependencies.len()
        );

        Ok(Self { name, root_path, package_descriptor })
    }
}

/// The two known template sets, loaded together.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    javascript: TemplateSet,
    typescript: TemplateSet,
}

impl TemplateRegistry {
    /// Loads both template sets from `templates_root`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a template set directory is missing or its
    ///   package descriptor is malformed
    /// * `Error::IoError` if a package descriptor cannot be read
    pub fn load<P: AsRef<Path>>(templates_root: P) -> Result<Self> {
        let templates_root = templates_root.as_ref();
        Ok(Self {
            javascript: TemplateSet::load(templates_root, Language::Javascript)?,
            typescript: TemplateSet::load(templates_root, Language::Typescript)?,
        })
    }

    /// Returns the template set for `language`. Never fails.
    pub fn select(&self, language: Language) -> &TemplateSet {
        match language {
            Language::Javascript => &self.javascript,
            Language::Typescript => &self.typescript,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(Language::from_flags(false, false), Language::Javascript);
        assert_eq!(Language::from_flags(true, false), Language::Typescript);
        assert_eq!(Language::from_flags(false, true), Language::Typescript);
        assert_eq!(Language::from_flags(true, true), Language::Typescript);
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::Javascript.to_string(), "Javascript");
        assert_eq!(Language::Typescript.to_string(), "Typescript");
        assert_eq!(Language::Typescript.dir_name(), "typescript");
    }
}
