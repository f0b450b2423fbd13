//! URL templates for the job endpoints

use saucerest_core::JobListQuery;
use saucerest_domain::constants::{LOG_ARTIFACT, VIDEO_ARTIFACT};
use saucerest_domain::{ArtifactKind, ClientConfig, Result, SauceRestError};
use url::Url;

/// Resolves every endpoint the client calls for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    artifact_base_url: String,
    account_id: String,
    legacy_log_url: bool,
}

impl Endpoints {
    /// Templates for `account_id` under the configured base URLs.
    pub fn new(config: &ClientConfig, account_id: impl Into<String>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            artifact_base_url: config.artifact_base_url.trim_end_matches('/').to_string(),
            account_id: account_id.into(),
            legacy_log_url: config.legacy_log_url,
        }
    }

    /// `{base}/{account}/jobs/{job_id}`
    pub fn job(&self, job_id: &str) -> Result<Url> {
        parse(format!("{}/{}/jobs/{}", self.base_url, self.account_id, job_id))
    }

    /// `{base}/{account}/{path}`
    pub fn sub_resource(&self, path: &str) -> Result<Url> {
        parse(format!("{}/{}/{}", self.base_url, self.account_id, path.trim_start_matches('/')))
    }

    /// `{base}/{account}/jobs?from=..&to=..&limit=..`
    pub fn job_list(&self, query: &JobListQuery) -> Result<Url> {
        parse(format!("{}/{}/jobs?{}", self.base_url, self.account_id, query.query_string()))
    }

    /// Video or log URL, depending on `kind`.
    pub fn artifact(&self, kind: ArtifactKind, job_id: &str) -> Result<Url> {
        match kind {
            ArtifactKind::Video => self.video(job_id),
            ArtifactKind::Log => self.log(job_id),
        }
    }

    /// `{artifact_base}/{account}/jobs/{job_id}/results/video.flv`
    pub fn video(&self, job_id: &str) -> Result<Url> {
        parse(format!(
            "{}/{}/jobs/{}/results/{VIDEO_ARTIFACT}",
            self.artifact_base_url, self.account_id, job_id
        ))
    }

    /// `{base}/{account}/jobs/{job_id}/assets/selenium-server.log`, or the
    /// historical `.../results/video.flv` path when `legacy_log_url` is set.
    pub fn log(&self, job_id: &str) -> Result<Url> {
        let job = format!("{}/{}/jobs/{}", self.base_url, self.account_id, job_id);
        if self.legacy_log_url {
            parse(format!("{job}/results/{VIDEO_ARTIFACT}"))
        } else {
            parse(format!("{job}/assets/{LOG_ARTIFACT}"))
        }
    }
}

fn parse(raw: String) -> Result<Url> {
    Url::parse(&raw).map_err(|e| SauceRestError::InvalidUrl(format!("{raw}: {e}")))
}
