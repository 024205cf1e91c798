//! Error handling for the c4gen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for c4gen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors raised by interactive prompts, including
    /// operator interrupts
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// The target package's metadata could not be read, parsed, or
    /// lacks an importable name
    #[error("Package manifest error: {0}.")]
    ManifestError(String),

    /// The component directory is already present; scaffolding the same
    /// tag twice is refused before any write
    #[error("Component directory '{component_dir}' already exists.")]
    ComponentExistsError { component_dir: String },

    /// The documentation service call failed or returned unusable data.
    /// Always recovered locally by substituting the fallback block
    #[error("Documentation service error: {0}.")]
    DocServiceError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
