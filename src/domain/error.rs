use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mkrepo operations.
///
/// Team attachment and branch-protection failures are deliberately absent:
/// those phases are best-effort and surface as [`Warning`]s on the outcome,
/// never as errors.
///
/// [`Warning`]: crate::domain::Warning
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required environment variable is not set.
    #[error("{0} is not set in environment")]
    EnvironmentVariableMissing(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The language template root directory does not exist.
    #[error("Language templates directory '{0}' does not exist")]
    TemplateRootMissing(PathBuf),

    /// No template registered for the requested language.
    #[error("Language '{language}' is not supported. Available languages: {available}")]
    UnsupportedLanguage { language: String, available: String },

    /// A template file exceeds the per-file upload ceiling.
    #[error("File '{path}' exceeds the maximum size of {limit_bytes} bytes ({size_bytes} bytes)")]
    FileTooLarge { path: String, size_bytes: u64, limit_bytes: u64 },

    /// The application name is empty after normalization.
    #[error("Application name '{0}' is empty after normalization")]
    EmptyApplicationName(String),

    /// A remote repository service call failed.
    #[error("{message}")]
    RemoteService { message: String, status: Option<u16> },

    /// Population failed after the repository was created; compensation ran.
    #[error("Repository '{repository}' creation failed ({cause}). {cleanup}")]
    ProvisioningFailed { repository: String, cause: String, cleanup: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn remote<S: Into<String>>(message: S) -> Self {
        AppError::RemoteService { message: message.into(), status: None }
    }
}
