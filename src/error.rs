//! Error handling for the kiln application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

use crate::scaffold::Stage;

/// Custom error types for kiln operations.
///
/// This enum represents all possible errors that can occur while a scaffold
/// is being produced. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents a bad or missing answer, e.g. an empty or unsafe application name
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template rendering,
    /// including references to variables missing from the context
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors in the generator configuration, package descriptors
    /// or ignore patterns
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents failures while collecting answers from the user
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents failures of the package manager invocation
    #[error("Install error: {0}.")]
    InstallError(String),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        // The alternate form includes the template line the error points at.
        Error::TemplateError(format!("{err:#}"))
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::IoError(err.into())
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised by one stage of the scaffold pipeline.
///
/// The underlying [`Error`] is kept as is so callers can inspect its kind.
#[derive(Error, Debug)]
#[error("{stage} stage failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: Error,
}

impl StageError {
    /// The underlying error, as raised by the failing stage.
    pub fn error(&self) -> &Error {
        &self.source
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler<E: std::fmt::Display>(err: E) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
