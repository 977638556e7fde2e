//! Console sink implementation

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::io::{self, Stdout, Write};

/// Writes each line to a console-like stream, standard output by default.
pub struct ConsoleSink<W: Write = Stdout> {
    writer: Mutex<W>,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Wrap any writer, e.g. a `Vec<u8>` to capture output
    ///
    /// # Example
    ///
    /// ```
    /// use severity_chain::prelude::*;
    ///
    /// let sink = ConsoleSink::new(Vec::new());
    /// sink.write("warning").unwrap();
    /// assert_eq!(sink.into_inner(), b"warning\n");
    /// ```
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl Default for ConsoleSink<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn write(&self, text: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", text)?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
