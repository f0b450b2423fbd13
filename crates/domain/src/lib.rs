//! # SauceREST Domain
//!
//! Domain types shared by the SauceREST client crates.
//!
//! This crate contains:
//! - Credentials, job update and job listing types
//! - The error type and Result alias
//! - Configuration structures
//! - Endpoint and timeout constants
//!
//! ## Architecture
//! - No dependencies on other SauceREST crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
