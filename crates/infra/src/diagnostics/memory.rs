//! In-memory diagnostic capture

use parking_lot::Mutex;
use saucerest_core::DiagnosticSink;

/// Keeps every recorded message, in order.
#[derive(Debug, Default)]
pub struct MemoryDiagnosticSink {
    messages: Mutex<Vec<String>>,
}

impl MemoryDiagnosticSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Number of messages recorded.
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Drop every recorded message.
    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl DiagnosticSink for MemoryDiagnosticSink {
    fn record(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
