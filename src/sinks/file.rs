//! File sink implementation

use crate::core::{ChainError, Result, Sink};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// What a [`FileSink`] does when its target cannot be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenFailurePolicy {
    /// Drop the line and report success; the drop is only visible through
    /// [`FileSink::dropped_writes`]
    #[default]
    Silent,
    /// Return [`ChainError::SinkOpen`]
    Strict,
}

/// Appends each line to a file, opening it in append mode on every write.
///
/// No handle is kept between writes. While a line is being written the file
/// holds an exclusive advisory lock, so concurrent appenders never interleave
/// partial lines.
pub struct FileSink {
    path: PathBuf,
    policy: OpenFailurePolicy,
    dropped_writes: AtomicU64,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: OpenFailurePolicy::default(),
            dropped_writes: AtomicU64::new(0),
        }
    }

    /// Set the open failure policy for this sink
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use severity_chain::sinks::{FileSink, OpenFailurePolicy};
    ///
    /// let sink = FileSink::new("/var/log/app.log")
    ///     .with_policy(OpenFailurePolicy::Strict);
    /// ```
    #[must_use]
    pub fn with_policy(mut self, policy: OpenFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> OpenFailurePolicy {
        self.policy
    }

    /// Lines discarded because the target could not be opened
    pub fn dropped_writes(&self) -> u64 {
        self.dropped_writes.load(Ordering::Relaxed)
    }

    fn open(&self) -> std::io::Result<File> {
        OpenOptions::new().create(true).append(true).open(&self.path)
    }
}

impl Sink for FileSink {
    fn write(&self, text: &str) -> Result<()> {
        let mut file = match self.open() {
            Ok(file) => file,
            Err(e) => {
                self.dropped_writes.fetch_add(1, Ordering::Relaxed);
                return match self.policy {
                    OpenFailurePolicy::Silent => Ok(()),
                    OpenFailurePolicy::Strict => Err(ChainError::sink_open(self.path.clone(), e)),
                };
            }
        };

        FileExt::lock_exclusive(&file)?;
        let written = writeln!(file, "{}", text).and_then(|()| file.flush());
        // Dropping the handle releases the lock too.
        let _ = FileExt::unlock(&file);
        written?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
