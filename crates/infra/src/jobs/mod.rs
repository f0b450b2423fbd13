//! Remote job client
//!
//! - [`RemoteJobClient`]: report status, fetch metadata, list jobs and save
//!   artifacts
//! - [`Endpoints`]: URL templates
//! - [`write_artifact`]: artifact persistence

pub mod artifacts;
pub mod client;
pub mod endpoints;

pub use artifacts::write_artifact;
pub use client::{RemoteJobClient, RemoteJobClientBuilder};
pub use endpoints::Endpoints;
