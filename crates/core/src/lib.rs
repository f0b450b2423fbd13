//! # SauceREST Core
//!
//! Pure client logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (the diagnostic sink)
//! - Job-list query construction and response parsing
//! - Artifact file naming
//!
//! ## Architecture Principles
//! - Only depends on `saucerest-domain`
//! - No HTTP or filesystem code

pub mod jobs;

// Infrastructure ports
pub mod diagnostics_ports;

pub use diagnostics_ports::DiagnosticSink;
pub use jobs::{
    artifact_file_name, artifact_path, ensure_file_safe_job_id, parse_job_list, unix_seconds,
    JobListQuery,
};
