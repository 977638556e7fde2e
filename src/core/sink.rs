//! Sink trait for log line destinations

use super::error::Result;

/// A destination that accepts one line of text per call.
///
/// Receivers take `&self` so a single sink can be borrowed by any number of
/// messages; implementations serialize their own writes.
pub trait Sink {
    /// Append `text` followed by a line terminator.
    fn write(&self, text: &str) -> Result<()>;
    fn name(&self) -> &str;
}
