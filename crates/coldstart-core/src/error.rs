//! Centralized error types for ColdStart.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ColdStart operations.
#[derive(Error, Debug)]
pub enum ColdstartError {
    #[error("Template root not found: no rules_template/ in the working directory or next to the executable")]
    TemplateRootNotFound,

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid config {file}: {message}")]
    InvalidConfig { file: String, message: String },

    #[error("Unknown IDE target '{0}' (known: cursor, windsurf, trae, cline)")]
    UnknownIde(String),

    #[error("Template error in {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: tera::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ColdStart operations.
pub type ColdstartResult<T> = Result<T, ColdstartError>;

impl ColdstartError {
    /// Create an invalid-config error.
    pub fn invalid_config(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            file: file.into(),
            message: message.into(),
        }
    }
}
