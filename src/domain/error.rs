use std::io;

use thiserror::Error;

use super::build_number::BuildNumberError;

/// Library-wide error type for pit-maint operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Repository manifest file missing.
    #[error("Repository manifest not found: {0}")]
    ManifestMissing(String),

    /// Repository manifest could not be parsed.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// A manifest entry is not an absolute URL.
    #[error("Invalid repository URL '{url}': {details}")]
    InvalidRepositoryUrl { url: String, details: String },

    /// Version file missing.
    #[error("Version file not found: {0}")]
    VersionFileMissing(String),

    /// Last line of the version file has no usable build number.
    #[error("Failed to update build number in {path}: {source}")]
    BuildNumber {
        path: String,
        #[source]
        source: BuildNumberError,
    },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind` view for callers that only need a coarse category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidRepositoryUrl { .. }
            | AppError::BuildNumber { .. } => io::ErrorKind::InvalidInput,
            AppError::ManifestMissing(_) | AppError::VersionFileMissing(_) => {
                io::ErrorKind::NotFound
            }
            AppError::GitError { .. } => io::ErrorKind::Other,
        }
    }
}
