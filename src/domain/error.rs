use std::io;

use thiserror::Error;

/// Library-wide error type for nuget-auth operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or input issue.
    #[error("{0}")]
    Configuration(String),

    /// Existing NuGet.config has no `configuration` root element.
    #[error("The provided NuGet.config seems invalid: {path}")]
    InvalidNuGetConfig { path: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// `NUGET_AUTH_TOKEN` is unset or empty.
    #[error(
        "The NUGET_AUTH_TOKEN environment variable was not provided. In this step, add the following: \r\nenv:\r\n  NUGET_AUTH_TOKEN: ${{{{secrets.GITHUB_TOKEN}}}}"
    )]
    MissingAuthToken,

    /// Source key contains characters outside the allowed set.
    #[error(
        "Invalid source name '{0}': source name can contain letters, numbers, and '-', '_', '.' symbols only. Please, fix source name in NuGet.config and try again."
    )]
    InvalidSourceKey(String),

    /// Neither an owner input nor a repository owner is available.
    #[error(
        "Could not determine the package owner: pass --owner or set GITHUB_REPOSITORY_OWNER / GITHUB_REPOSITORY"
    )]
    OwnerUnresolved,

    /// Internal error (serialization, output plumbing).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
