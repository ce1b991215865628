//! Shared error types for the checker and its host pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for enforce-methods operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing errors
    #[error("Parse error in {}:{line}:{column}: {message}", file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Plugin settings could not be decoded into their typed form
    #[error("Invalid plugin settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Directory walk errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with location
    pub fn parse(
        file: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
