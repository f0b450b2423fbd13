//! Configuration structures
//!
//! Every client knob has a default, so an empty `[client]` table (or none at
//! all) yields the historical behavior.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ARTIFACT_BASE_URL, DEFAULT_BASE_URL, DOWNLOAD_TIMEOUT_MS, LIST_TIMEOUT_MS,
    READ_TIMEOUT_MS, UPDATE_TIMEOUT_MS, USER_AGENT,
};
use crate::types::Credentials;

/// Top-level configuration: who we are and how we talk to the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Required `account` section.
    pub account: AccountConfig,
    /// Optional `client` section.
    #[serde(default)]
    pub client: ClientConfig,
}

/// Account credentials as they appear in config files.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountConfig {
    pub account_id: String,
    pub access_token: String,
}

impl AccountConfig {
    /// Credentials for the client.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.account_id.clone(), self.access_token.clone())
    }
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("account_id", &self.account_id)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Transport and endpoint settings for [`Config`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Root for job, list and sub-resource endpoints.
    pub base_url: String,
    /// Root for the video artifact endpoint.
    pub artifact_base_url: String,
    pub read_timeout_ms: u64,
    pub update_timeout_ms: u64,
    pub list_timeout_ms: u64,
    pub download_timeout_ms: u64,
    /// Point `download_log` at the historical `results/video.flv` path.
    pub legacy_log_url: bool,
    /// Append-only diagnostic log. `None` routes diagnostics to `tracing`.
    pub diagnostics_path: Option<PathBuf>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            artifact_base_url: DEFAULT_ARTIFACT_BASE_URL.to_string(),
            read_timeout_ms: READ_TIMEOUT_MS,
            update_timeout_ms: UPDATE_TIMEOUT_MS,
            list_timeout_ms: LIST_TIMEOUT_MS,
            download_timeout_ms: DOWNLOAD_TIMEOUT_MS,
            legacy_log_url: false,
            diagnostics_path: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Timeout for job info and sub-resource reads.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Timeout for job updates.
    pub fn update_timeout(&self) -> Duration {
        Duration::from_millis(self.update_timeout_ms)
    }

    /// Default timeout for job listing.
    pub fn list_timeout(&self) -> Duration {
        Duration::from_millis(self.list_timeout_ms)
    }

    /// Timeout for artifact downloads.
    pub fn download_timeout(&self) -> Duration {
        Duration::from_millis(self.download_timeout_ms)
    }
}
