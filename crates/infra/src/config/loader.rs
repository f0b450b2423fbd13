//! Configuration file loader
//!
//! Reads a [`Config`] from a JSON or TOML file, chosen by extension. Nothing
//! is read from the environment; callers decide whether a file is loaded at
//! all.
//!
//! ## File Locations
//! When no path is given, the first existing file among these wins:
//! 1. `./saucerest.json`, `./saucerest.toml`
//! 2. `../saucerest.json`, `../saucerest.toml`
//! 3. `saucerest.json`, `saucerest.toml` next to the executable

use std::path::{Path, PathBuf};

use saucerest_domain::{Config, Result, SauceRestError};

const FILE_NAMES: [&str; 2] = ["saucerest.json", "saucerest.toml"];

/// Load configuration from `path`, or from the first probed location when
/// `path` is `None`.
///
/// # Errors
/// Returns `SauceRestError::Config` if:
/// - the given file does not exist, or no probed file exists
/// - the file cannot be read
/// - the extension is neither `json` nor `toml`
/// - the content is malformed or lacks the `account` section
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            return Err(SauceRestError::Config(format!("Config file not found: {}", p.display())));
        }
        None => probe_config_paths().ok_or_else(|| {
            SauceRestError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SauceRestError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    match path.extension().and_then(|e| e.to_str()).unwrap_or_default() {
        "toml" => toml::from_str(contents)
            .map_err(|e| SauceRestError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SauceRestError::Config(format!("Invalid JSON format: {e}"))),
        other => Err(SauceRestError::Config(format!("Unsupported config format: {other:?}"))),
    }
}

/// First existing config file in the standard locations, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}
