use std::io;

use kiln::error::{Error, StageError};
use kiln::scaffold::Stage;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ValidationError("'applicationName' is required".to_string());
    assert_eq!(err.to_string(), "Validation error: 'applicationName' is required.");

    let err = Error::TemplateError("rendering failed".to_string());
    assert_eq!(err.to_string(), "Template error: rendering failed.");
}

#[test]
fn test_minijinja_error_is_template_error() {
    let env = minijinja::Environment::new();
    let err: Error = match env.template_from_str("{% if %}") {
        Ok(_) => panic!("Expected a syntax error"),
        Err(e) => e.into(),
    };
    assert!(matches!(err, Error::TemplateError(_)));
}

#[test]
fn test_stage_error_names_stage() {
    let err = StageError {
        stage: Stage::RenderManifest,
        source: Error::TemplateError("undefined value".to_string()),
    };
    assert_eq!(
        err.to_string(),
        "RenderManifest stage failed: Template error: undefined value."
    );
    assert!(matches!(err.error(), Error::TemplateError(_)));
}
