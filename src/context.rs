//! Substitution context construction.
//! Combines the user's answers with the selected template set and the
//! generator configuration into the one context every render receives.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::registry::TemplateSet;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Component, Path};

/// Answer key holding the project directory name
pub const APPLICATION_NAME: &str = "applicationName";

/// Answers returned by the prompting collaborator.
pub type Answers = IndexMap<String, String>;

/// Variables available to every rendered template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionContext {
    pub template_name: String,
    pub application_name: String,
    pub cmd: String,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
    pub node_version: String,
    pub package_manager: String,
    pub package_manager_version: String,
}

impl SubstitutionContext {
    pub fn to_value(&self) -> serde_json::Value {
        // Every field is a string or a string map, serialization cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Returns the trimmed application name answer, rejecting missing or blank values.
pub fn application_name(answers: &Answers) -> Result<&str> {
    match answers.get(APPLICATION_NAME).map(|name| name.trim()) {
        Some(name) if !name.is_empty() => Ok(name),
        Some(_) => Err(Error::ValidationError(format!("'{APPLICATION_NAME}' must not be empty"))),
        None => Err(Error::ValidationError(format!("'{APPLICATION_NAME}' is required"))),
    }
}

/// Checks that the application name is usable as a directory relative to
/// the invocation directory: no absolute paths, no `..`, no `.`.
pub fn validate_destination(name: &str) -> Result<()> {
    let path = Path::new(name);
    if path.has_root() || path.is_absolute() {
        return Err(Error::ValidationError(format!(
            "application name '{name}' must be a relative path"
        )));
    }

    let mut components = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => components += 1,
            Component::CurDir => {}
            _ => {
                return Err(Error::ValidationError(format!(
                    "application name '{name}' must not leave the current directory"
                )))
            }
        }
    }
    if components == 0 {
        return Err(Error::ValidationError(format!(
            "application name '{name}' does not name a directory"
        )));
    }

    Ok(())
}

/// Builds the substitution context. Has no side effects.
///
/// # Errors
/// * `Error::ValidationError` if `applicationName` is missing or empty
pub fn resolve(
    answers: &Answers,
    template_set: &TemplateSet,
    config: &Config,
) -> Result<SubstitutionContext> {
    let application_name = application_name(answers)?;
    let descriptor = &template_set.package_descriptor;

    Ok(SubstitutionContext {
        template_name: template_set.name.to_string(),
        application_name: application_name.to_string(),
        cmd: config.run_command.clone(),
        dependencies: descriptor.dependencies.clone(),
        dev_dependencies: descriptor.dev_dependencies.clone(),
        node_version: config.node_version.clone(),
        package_manager: config.package_manager.clone(),
        package_manager_version: config.package_manager_version.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_destination() {
        assert!(validate_destination("demo-app").is_ok());
        assert!(validate_destination("apps/demo").is_ok());
        assert!(validate_destination("./demo").is_ok());
        assert!(validate_destination("../evil").is_err());
        assert!(validate_destination("demo/../../evil").is_err());
        assert!(validate_destination("/tmp/evil").is_err());
        assert!(validate_destination(".").is_err());
    }

    #[test]
    fn test_application_name_required() {
        let mut answers = Answers::new();
        assert!(matches!(application_name(&answers), Err(Error::ValidationError(_))));

        answers.insert(APPLICATION_NAME.to_string(), "   ".to_string());
        assert!(matches!(application_name(&answers), Err(Error::ValidationError(_))));

        answers.insert(APPLICATION_NAME.to_string(), " demo\t".to_string());
        assert_eq!(application_name(&answers).unwrap(), "demo");
    }
}
