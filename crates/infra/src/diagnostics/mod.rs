//! Diagnostic sink adapters
//!
//! Implementations of [`saucerest_core::DiagnosticSink`]:
//! - [`FileDiagnosticSink`]: append-only log file
//! - [`TracingDiagnosticSink`]: `tracing` events (default)
//! - [`MemoryDiagnosticSink`]: in-memory capture

pub mod file;
pub mod memory;
pub mod tracing_sink;

pub use file::FileDiagnosticSink;
pub use memory::MemoryDiagnosticSink;
pub use tracing_sink::TracingDiagnosticSink;
