//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("no versions found in XRD")]
    NoVersions,

    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocsError {
    /// Create an invalid document error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocsError>;
