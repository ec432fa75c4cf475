use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to load config file '{path}': {reason}.")]
    ConfigLoadError { path: String, reason: String },

    #[error("Failed to look up '{package}' in the registry: {reason}")]
    RegistryLookupError { package: String, reason: String },

    #[error("Failed to install package '{package}': {detail}")]
    PackageInstallError { package: String, detail: String },

    /// Neither a local path nor a registry package resolves for the selection.
    #[error("Template '{selection}' could not be resolved to a source.")]
    TemplateNotFound { selection: String },

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },
}

/// Convenience type alias for Results with Stamp's Error as the error type.
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
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
