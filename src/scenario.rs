//! The demo routine: three messages through the standard chain
//!
//! A Warning goes to the console, an Error to the file sink, and an
//! UnknownMessage fails by design. Each failure is reported on the report
//! stream and the next message is still routed.

use crate::core::{ChainError, Delivery, HandlerChain, LogMessage, Sink};
use crate::sinks::FileSink;
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Target the demo's file sink appends to, relative to the working directory
pub const DEFAULT_FILE_PATH: &str = "file_path";

/// Settings for a demo run
#[derive(Debug, Clone)]
pub struct Scenario {
    file_path: PathBuf,
    colored_reports: bool,
}

impl Scenario {
    pub fn new() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            colored_reports: false,
        }
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Color failure reports by the failing message's severity
    #[must_use]
    pub fn with_colored_reports(mut self, colored: bool) -> Self {
        self.colored_reports = colored;
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Run against standard output with the standard chain
    pub fn run(&self) -> io::Result<Vec<Result<Delivery, ChainError>>> {
        let console = crate::sinks::ConsoleSink::stdout();
        self.run_with(&HandlerChain::standard(), &console, &mut io::stdout())
    }

    /// Route the three demo messages through `chain`.
    ///
    /// Routing failures are written to `report` and collected; only a failure
    /// to write the report itself aborts the run.
    pub fn run_with<W: Write>(
        &self,
        chain: &HandlerChain,
        console: &dyn Sink,
        report: &mut W,
    ) -> io::Result<Vec<Result<Delivery, ChainError>>> {
        let file = FileSink::new(&self.file_path);

        let messages = [
            LogMessage::warning(console),
            LogMessage::error(&file),
            LogMessage::unknown(),
        ];

        let mut outcomes = Vec::with_capacity(messages.len());
        for message in &messages {
            let outcome = chain.receive(message);
            if let Err(ref e) = outcome {
                self.report_failure(report, message, e)?;
            }
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    fn report_failure<W: Write>(
        &self,
        report: &mut W,
        message: &LogMessage<'_>,
        error: &ChainError,
    ) -> io::Result<()> {
        if self.colored_reports {
            let text = error.to_string().color(message.classify().color());
            writeln!(report, "{}", text)
        } else {
            writeln!(report, "{}", error)
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}
