//! Log message variants

use super::{
    error::{ChainError, Result},
    severity::Severity,
    sink::Sink,
};
use std::fmt;

const WARNING_TEXT: &str = "warning";
const ERROR_TEXT: &str = "Error";
const FATAL_ERROR_TEXT: &str = "FatalError!";
const UNKNOWN_MESSAGE_TEXT: &str = "UnknownMessage!";

/// A message routed through a [`HandlerChain`](super::chain::HandlerChain).
///
/// Warning and Error messages borrow the sink they emit through. FatalError
/// and UnknownMessage carry no sink and always fail when emitted, whether or
/// not a link accepts them.
#[derive(Clone, Copy)]
pub enum LogMessage<'s> {
    Warning { sink: &'s dyn Sink },
    Error { sink: &'s dyn Sink },
    FatalError,
    UnknownMessage,
}

impl<'s> LogMessage<'s> {
    pub fn warning(sink: &'s dyn Sink) -> Self {
        LogMessage::Warning { sink }
    }

    pub fn error(sink: &'s dyn Sink) -> Self {
        LogMessage::Error { sink }
    }

    pub fn fatal() -> Self {
        LogMessage::FatalError
    }

    pub fn unknown() -> Self {
        LogMessage::UnknownMessage
    }

    /// Severity used for routing. Has no side effects.
    pub fn classify(&self) -> Severity {
        match self {
            LogMessage::Warning { .. } => Severity::Warning,
            LogMessage::Error { .. } => Severity::Error,
            LogMessage::FatalError => Severity::FatalError,
            LogMessage::UnknownMessage => Severity::UnknownMessage,
        }
    }

    /// Write this message's line to its sink and return the same text.
    pub fn emit(&self) -> Result<String> {
        match self {
            LogMessage::Warning { sink } => {
                sink.write(WARNING_TEXT)?;
                Ok(WARNING_TEXT.to_string())
            }
            LogMessage::Error { sink } => {
                sink.write(ERROR_TEXT)?;
                Ok(ERROR_TEXT.to_string())
            }
            LogMessage::FatalError => Err(ChainError::fatal(FATAL_ERROR_TEXT)),
            LogMessage::UnknownMessage => Err(ChainError::fatal(UNKNOWN_MESSAGE_TEXT)),
        }
    }
}

impl fmt::Debug for LogMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogMessage::Warning { sink } | LogMessage::Error { sink } => f
                .debug_struct(self.classify().to_str())
                .field("sink", &sink.name())
                .finish(),
            LogMessage::FatalError | LogMessage::UnknownMessage => {
                f.write_str(self.classify().to_str())
            }
        }
    }
}
