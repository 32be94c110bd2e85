//! Common constants used throughout the kiln application.

/// Supported generator configuration file names
pub const CONFIG_FILES: [&str; 3] = ["kiln.json", "kiln.yml", "kiln.yaml"];

/// Per-template-set ignore file name
pub const IGNORE_FILE: &str = ".kilnignore";

/// Environment variable pointing at the template root
pub const TEMPLATES_ENV: &str = "KILN_TEMPLATES";

/// Directory holding the templates shared by every template set
pub const COMMON_DIR: &str = "common";

/// Package descriptor file name, also the rendered manifest name
pub const PACKAGE_MANIFEST: &str = "package.json";

pub const README: &str = "README.md";

pub const ENTRY_HTML: &str = "index.html";

pub const GITIGNORE_SAMPLE: &str = ".gitignore.sample";

pub const GITIGNORE: &str = ".gitignore";

/// Suffix of files rendered through the template engine
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Paths never copied by the tree copier. The named files are produced
/// by the conditional writer or copied under another name instead.
pub const DEFAULT_EXCLUDES: [&str; 10] = [
    "**/node_modules",
    "**/node_modules/**",
    "**/package.json",
    "**/package-lock.json",
    "**/yarn.lock",
    "**/pnpm-lock.yaml",
    "**/index.html",
    "**/README.md",
    "**/.gitignore.sample",
    "**/.npmignore",
];
