//! Dependency installation for a finished scaffold.

use crate::config::Config;
use crate::error::{Error, Result};
use log::info;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs `<package manager> install` inside `destination`.
///
/// # Returns
/// * `Ok(false)` when `skip` is set and nothing ran, `Ok(true)` after a
///   successful install
///
/// # Errors
/// * `Error::InstallError` if the package manager cannot be started or exits
///   with a non-zero status
pub fn install<P: AsRef<Path>>(destination: P, config: &Config, skip: bool) -> Result<bool> {
    if skip {
        return Ok(false);
    }

    let destination = destination.as_ref();
    info!("Running '{} install' in {}", config.package_manager, destination.display());
    let status = Command::new(&config.package_manager)
        .arg("install")
        .current_dir(destination)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            Error::InstallError(format!("failed to run '{}': {e}", config.package_manager))
        })?;

    if !status.success() {
        return Err(Error::InstallError(format!(
            "'{} install' failed with status: {status}",
            config.package_manager
        )));
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_runs_nothing() {
        let config = Config {
            package_manager: "definitely-not-a-package-manager".to_string(),
            ..Config::default()
        };
        assert!(!install("does-not-exist", &config, true).unwrap());
    }

    #[test]
    fn test_missing_executable() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            package_manager: "definitely-not-a-package-manager".to_string(),
            ..Config::default()
        };
        assert!(matches!(install(dir.path(), &config, false), Err(Error::InstallError(_))));
    }
}
