//! Append-only diagnostic log file

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use saucerest_core::DiagnosticSink;
use tracing::error;

/// Appends one line per failure message to a file.
///
/// The file is opened per message so external rotation is picked up; writes
/// from concurrent callers are serialized by an internal lock.
#[derive(Debug)]
pub struct FileDiagnosticSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileDiagnosticSink {
    /// Sink appending to `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    /// File the sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        let _guard = self.lock.lock();
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{message}")
    }
}

impl DiagnosticSink for FileDiagnosticSink {
    fn record(&self, message: &str) {
        if let Err(e) = self.append(message) {
            error!(path = %self.path.display(), error = %e, "failed to write diagnostic log");
        }
    }
}
