mod common;

use kiln::config::Config;
use kiln::context::{resolve, Answers, APPLICATION_NAME};
use kiln::error::Error;
use kiln::registry::{Language, TemplateRegistry};

fn answers(name: &str) -> Answers {
    let mut answers = Answers::new();
    answers.insert(APPLICATION_NAME.to_string(), name.to_string());
    answers
}

#[test]
fn test_resolve_context() {
    let templates = common::fixture_templates();
    let registry = TemplateRegistry::load(templates.path()).unwrap();
    let template_set = registry.select(Language::Typescript);
    let config = Config::default();

    let context = resolve(&answers("demo-app"), template_set, &config).unwrap();

    assert_eq!(context.template_name, "Typescript");
    assert_eq!(context.application_name, "demo-app");
    assert_eq!(context.cmd, "pnpm");
    assert_eq!(context.package_manager, "pnpm");
    assert_eq!(context.node_version, "16.13.1");
    assert_eq!(context.dependencies, template_set.package_descriptor.dependencies);
    assert_eq!(context.dev_dependencies, template_set.package_descriptor.dev_dependencies);

    let value = context.to_value();
    for key in [
        "templateName",
        "applicationName",
        "cmd",
        "dependencies",
        "devDependencies",
        "nodeVersion",
        "packageManager",
        "packageManagerVersion",
    ] {
        assert!(value.get(key).is_some(), "missing context key {key}");
    }
    assert_eq!(value["dependencies"]["vue"], "^3.2.45");
}

#[test]
fn test_resolve_requires_application_name() {
    let templates = common::fixture_templates();
    let registry = TemplateRegistry::load(templates.path()).unwrap();
    let template_set = registry.select(Language::Javascript);

    let err = resolve(&Answers::new(), template_set, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::ValidationError(_)));

    let err = resolve(&answers(""), template_set, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::ValidationError(_)));
}
