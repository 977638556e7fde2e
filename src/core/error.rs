//! Error types for the handler chain

use super::severity::Severity;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ChainError>;

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// Raised by message variants that always fail when emitted
    #[error("{message}")]
    Fatal { message: String },

    /// No link in the chain accepts the message's severity
    #[error("Error: Log message should be handled!")]
    Unhandled { severity: Severity },

    /// A second link for an already covered severity would never be reached
    #[error("Chain already has a link for {severity}")]
    DuplicateLink { severity: Severity },

    /// File sink could not open its target (strict policy only)
    #[error("Failed to open log file '{}': {source}", .path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChainError {
    /// Create a fatal-message error
    pub fn fatal(message: impl Into<String>) -> Self {
        ChainError::Fatal {
            message: message.into(),
        }
    }

    /// Create an unhandled-severity error
    pub fn unhandled(severity: Severity) -> Self {
        ChainError::Unhandled { severity }
    }

    pub fn duplicate_link(severity: Severity) -> Self {
        ChainError::DuplicateLink { severity }
    }

    /// Create a sink open error with the offending path
    pub fn sink_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChainError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// True for errors a message variant raises on purpose
    pub fn is_fatal(&self) -> bool {
        matches!(self, ChainError::Fatal { .. })
    }

    /// True when the chain had no link for the message
    pub fn is_unhandled(&self) -> bool {
        matches!(self, ChainError::Unhandled { .. })
    }
}
