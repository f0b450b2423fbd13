//! Configuration loading
//!
//! Reads client configuration from JSON or TOML files.

pub mod loader;

pub use loader::{load_from_file, probe_config_paths};
