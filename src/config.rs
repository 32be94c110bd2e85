//! Generator configuration.
//! The template root may carry a `kiln.json`, `kiln.yml` or `kiln.yaml` file
//! pinning the package manager and runtime versions written into scaffolds.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Static metadata merged into every substitution context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Executable used for the dependency installation step
    pub package_manager: String,
    pub package_manager_version: String,
    pub node_version: String,
    /// Command prefix shown in generated docs, e.g. `pnpm` in `pnpm dev`
    pub run_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_manager: "pnpm".to_string(),
            package_manager_version: "8.15.4".to_string(),
            node_version: "16.13.1".to_string(),
            run_command: "pnpm".to_string(),
        }
    }
}

/// Loads the generator configuration from a template root, trying multiple
/// file formats. Falls back to [`Config::default`] when no file exists.
///
/// # Errors
/// * `Error::IoError` if an existing config file cannot be read
/// * `Error::ConfigError` if it is neither valid JSON nor valid YAML
pub fn load_config<P: AsRef<Path>>(templates_root: P) -> Result<Config> {
    for file in CONFIG_FILES {
        let config_path = templates_root.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            return parse_config(&content);
        }
    }

    debug!("No configuration file found (tried: {}), using defaults", CONFIG_FILES.join(", "));
    Ok(Config::default())
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = parse_config("packageManager: yarn\nrunCommand: yarn").unwrap();
        assert_eq!(config.package_manager, "yarn");
        assert_eq!(config.run_command, "yarn");
        assert_eq!(config.node_version, Config::default().node_version);
    }

    #[test]
    fn test_json_config() {
        let config = parse_config(r#"{"nodeVersion": "20.11.0"}"#).unwrap();
        assert_eq!(config.node_version, "20.11.0");
        assert_eq!(config.package_manager, "pnpm");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(matches!(parse_config("colour: red"), Err(Error::ConfigError(_))));
    }
}
