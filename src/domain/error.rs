use std::io;

use thiserror::Error;

/// Library-wide error type for addon-publish operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Invocation inputs violate a required or mutually-exclusive constraint.
    #[error("{0}")]
    Configuration(String),

    /// A referenced file or directory does not exist.
    #[error("{what} not found: {path}")]
    NotFound { what: String, path: String },

    /// An external tool (helm, rctl) failed to run or exited non-zero.
    ///
    /// `output` holds whatever the tool printed; it is relayed separately from the message.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String, output: String },

    /// The spec document has an unexpected shape.
    #[error("Invalid spec document: {0}")]
    InvalidSpec(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn not_found<W: Into<String>>(what: W, path: &std::path::Path) -> Self {
        AppError::NotFound { what: what.into(), path: path.display().to_string() }
    }

    /// Output captured from a failed external tool, if any.
    pub fn tool_output(&self) -> Option<&str> {
        match self {
            AppError::ExternalToolError { output, .. } if !output.trim().is_empty() => {
                Some(output)
            }
            _ => None,
        }
    }
}
