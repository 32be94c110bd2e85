//! Command-line interface implementation for kiln.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::TEMPLATES_ENV;
use crate::registry::Language;

/// Command-line arguments structure for kiln.
#[derive(Parser, Debug)]
#[command(author, version, about = "kiln: javascript/typescript project scaffolding tool", long_about = None)]
pub struct Args {
    /// Name of the application, also the directory it is created in.
    /// Prompted for when omitted.
    #[arg(value_name = "APP_NAME")]
    pub application_name: Option<String>,

    /// Use the typescript template set
    #[arg(long)]
    pub typescript: bool,

    /// Alias of --typescript
    #[arg(long)]
    pub ts: bool,

    /// Do not install dependencies after scaffolding
    #[arg(long)]
    pub skip_install: bool,

    /// Read answers as a JSON object from stdin
    #[arg(short, long, conflicts_with = "application_name")]
    pub stdin: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding the template sets
    #[arg(long, value_name = "DIR", env = TEMPLATES_ENV)]
    pub templates: Option<PathBuf>,
}

impl Args {
    pub fn language(&self) -> Language {
        Language::from_flags(self.typescript, self.ts)
    }

    /// The template root, defaulting to the templates shipped with kiln.
    pub fn templates_root(&self) -> PathBuf {
        self.templates
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
