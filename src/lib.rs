//! kiln creates javascript or typescript projects from a template tree.
//! It copies the selected template set, renders the package manifest,
//! readme and entry page, and never overwrites a file that already exists.

/// Command-line interface module for the kiln application
pub mod cli;

/// Generator configuration (package manager and runtime pins)
/// Supports JSON and YAML formats (kiln.json, kiln.yml, kiln.yaml)
pub mod config;

pub mod constants;

/// Substitution context built from answers and template metadata
pub mod context;

/// Tree copier with include/exclude filtering
pub mod copier;

/// Error types and handling for the kiln application
pub mod error;

/// Exclusion patterns: built-in defaults plus .kilnignore files
pub mod ignore;

/// Post-scaffold dependency installation
pub mod install;

pub mod logger;

/// User input and interaction handling
pub mod prompt;

/// Template sets and their selection by language flavor
pub mod registry;

/// Template rendering functionality
pub mod renderer;

/// Stage-by-stage scaffold orchestration
pub mod scaffold;

/// Skip-if-exists rendering and copying of single files
pub mod writer;
