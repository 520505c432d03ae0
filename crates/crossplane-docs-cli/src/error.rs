//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

use crossplane_docs_core::DocsError;
use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {path}")]
    #[diagnostic(code(crossplane_docs::cli::not_found))]
    FileNotFound { path: String },

    /// Input could not be parsed
    #[error("Invalid input: {message}")]
    #[diagnostic(code(crossplane_docs::cli::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Documentation could not be generated from the parsed input
    #[error("Failed to generate documentation: {message}")]
    #[diagnostic(code(crossplane_docs::cli::generate))]
    Generation {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// IO error (permissions, unwritable output, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(crossplane_docs::cli::io))]
    Io { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::FileNotFound { .. } | CliError::Input { .. } => exit_codes::INPUT_ERROR,
            CliError::Generation { .. } => exit_codes::GENERATION_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
        }
    }

    /// Create a file-not-found error
    pub fn not_found(path: &Path) -> Self {
        Self::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io(context: &str, err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{}: {}", context, err),
        }
    }
}

impl From<DocsError> for CliError {
    fn from(err: DocsError) -> Self {
        match err {
            DocsError::NoVersions => CliError::Generation {
                message: err.to_string(),
                help: Some("Declare at least one entry under spec.versions".to_string()),
            },
            DocsError::YamlParse(_) => CliError::Input {
                message: err.to_string(),
                help: Some("Check that the file is valid YAML".to_string()),
            },
            DocsError::InvalidDocument { .. } => CliError::Input {
                message: err.to_string(),
                help: None,
            },
            DocsError::Io(e) => CliError::io("failed to read file", e),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
