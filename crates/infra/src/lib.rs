//! # SauceREST Infrastructure
//!
//! Blocking HTTP implementation of the job reporting client.
//!
//! This crate contains:
//! - The [`RemoteJobClient`] and its endpoint templates
//! - The blocking HTTP transport and Basic authentication
//! - Diagnostic sink adapters (file, tracing, memory)
//! - Configuration loading from JSON and TOML files
//!
//! ## Architecture
//! - Implements ports defined in `saucerest-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod http;
pub mod jobs;

// Re-export commonly used items
pub use diagnostics::{FileDiagnosticSink, MemoryDiagnosticSink, TracingDiagnosticSink};
pub use errors::InfraError;
pub use http::{basic_auth_header, encode_basic_token, HttpClient, HttpClientBuilder};
pub use jobs::{write_artifact, Endpoints, RemoteJobClient, RemoteJobClientBuilder};
