use saucerest_core::DiagnosticSink;
use tracing::warn;

/// Forwards diagnostics to the `tracing` subscriber the host application
/// installed. Used when no diagnostic file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnosticSink;

impl DiagnosticSink for TracingDiagnosticSink {
    fn record(&self, message: &str) {
        warn!(target: "saucerest::diagnostics", "{message}");
    }
}
