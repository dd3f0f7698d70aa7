use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for vgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A required argument is missing, malformed or does not resolve.
    #[error("{0}")]
    Validation(String),

    /// Output file exists and overwrite was not requested.
    #[error("View file {} exists, use -f option to overwrite", path.display())]
    Conflict { path: PathBuf },

    /// A collaborating service (model metadata, catalog) failed.
    #[error("{0}")]
    Dependency(String),

    /// Template file was not found in any search folder.
    #[error("Template file {name} not found within search paths: {searched}")]
    TemplateNotFound { name: String, searched: String },

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Model catalog could not be parsed.
    #[error("Failed to parse model catalog {path}: {details}")]
    CatalogParse { path: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }
}
