//! Client constants
//!
//! Endpoint roots, per-operation timeouts and artifact naming.

// Endpoint roots
/// REST root for job, list and sub-resource endpoints.
pub const DEFAULT_BASE_URL: &str = "https://saucelabs.com/rest/v1";
/// REST root for the video artifact.
pub const DEFAULT_ARTIFACT_BASE_URL: &str = "https://saucelabs.com/rest";

// Per-operation timeouts
/// Job info and sub-resource reads.
pub const READ_TIMEOUT_MS: u64 = 7_000;
/// Job field updates.
pub const UPDATE_TIMEOUT_MS: u64 = 10_000;
/// Job listing, unless the call overrides it.
pub const LIST_TIMEOUT_MS: u64 = 7_000;
/// Video and log downloads.
pub const DOWNLOAD_TIMEOUT_MS: u64 = 20_000;

// Artifact naming
/// `yyyyMMdd_HHmmss`, appended to the job id in artifact file names.
pub const ARTIFACT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Last path segment of the video endpoint.
pub const VIDEO_ARTIFACT: &str = "video.flv";
/// Last path segment of the server log endpoint.
pub const LOG_ARTIFACT: &str = "selenium-server.log";

/// Substring that marks a job-list response as an error payload.
pub const ERROR_MARKER: &str = "error";

/// Default `User-Agent` header.
pub const USER_AGENT: &str = concat!("saucerest-rs/", env!("CARGO_PKG_VERSION"));
