//! Remote job client
//!
//! One blocking round trip per call against the job REST API. Every
//! operation comes in two forms:
//!
//! - `try_*` returns `Result`, so callers can tell "no data" from "failed";
//! - the unprefixed form degrades to the empty value (`""`, empty `Vec`,
//!   no-op), which is what existing callers of the service expect.
//!
//! Both forms report each failure to the configured [`DiagnosticSink`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use reqwest::blocking::{RequestBuilder, Response};
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use saucerest_core::{
    artifact_path, ensure_file_safe_job_id, parse_job_list, DiagnosticSink, JobListQuery,
};
use saucerest_domain::{
    ArtifactKind, ClientConfig, Config, Credentials, JobListEntry, JobUpdate, Result,
    SauceRestError,
};
use tracing::{instrument, warn};
use url::Url;

use super::artifacts::write_artifact;
use super::endpoints::Endpoints;
use crate::diagnostics::{FileDiagnosticSink, TracingDiagnosticSink};
use crate::errors::InfraError;
use crate::http::{basic_auth_header, encode_basic_token, HttpClient};

const RETRIEVE_FAILURE: &str = "Error retrieving Sauce Results";
const UPDATE_FAILURE: &str = "Error updating Sauce Results";
const DOWNLOAD_FAILURE: &str = "Error downloading Sauce Results";

/// Client for reporting and inspecting remote test jobs.
pub struct RemoteJobClient {
    credentials: Credentials,
    config: ClientConfig,
    endpoints: Endpoints,
    auth_header: HeaderValue,
    http: HttpClient,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for RemoteJobClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteJobClient")
            .field("credentials", &self.credentials)
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl RemoteJobClient {
    /// Client with default endpoints and timeouts, reporting diagnostics
    /// through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns `SauceRestError::Config` if the HTTP transport cannot be built.
    pub fn new(account_id: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::builder().credentials(Credentials::new(account_id, access_token)).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> RemoteJobClientBuilder {
        RemoteJobClientBuilder::default()
    }

    /// Client from loaded configuration. A configured `diagnostics_path`
    /// selects the append-only file sink.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder()
            .credentials(config.account.credentials())
            .config(config.client.clone())
            .build()
    }

    /// Credentials every request authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Endpoint and timeout settings in effect.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base64 of `account_id:access_token`, the Basic-Auth token sent with
    /// every request.
    pub fn encode_authentication(&self) -> String {
        encode_basic_token(&self.credentials)
    }

    /* ---------------------------------------------------------------------- */
    /* Typed operations */
    /* ---------------------------------------------------------------------- */

    /// Raw JSON document for one job.
    ///
    /// # Errors
    ///
    /// Any URL, transport, timeout or non-200 failure.
    #[instrument(skip(self))]
    pub fn try_get_job_info(&self, job_id: &str) -> Result<String> {
        let result = self
            .endpoints
            .job(job_id)
            .and_then(|url| self.get_text(url, self.config.read_timeout()));
        self.observe(RETRIEVE_FAILURE, result)
    }

    /// Raw body of `{base}/{account}/{path}`.
    #[instrument(skip(self))]
    pub fn try_retrieve_results(&self, path: &str) -> Result<String> {
        let result = self
            .endpoints
            .sub_resource(path)
            .and_then(|url| self.get_text(url, self.config.read_timeout()));
        self.observe(RETRIEVE_FAILURE, result)
    }

    /// Send `updates` as the job's new field values.
    #[instrument(skip(self))]
    pub fn try_update_job_info(&self, job_id: &str, updates: &JobUpdate) -> Result<()> {
        let result = self.endpoints.job(job_id).and_then(|url| self.put_json(url, updates));
        self.observe(UPDATE_FAILURE, result)
    }

    /// Mark the job as passed with `{"passed": true}`.
    pub fn try_job_passed(&self, job_id: &str) -> Result<()> {
        self.try_update_job_info(job_id, &JobUpdate::passed(true))
    }

    /// Mark the job as failed with `{"passed": false}`.
    pub fn try_job_failed(&self, job_id: &str) -> Result<()> {
        self.try_update_job_info(job_id, &JobUpdate::passed(false))
    }

    /// Jobs inside the query's time window.
    ///
    /// A response body mentioning `error` yields `Ok` with no jobs.
    ///
    /// # Errors
    ///
    /// Transport failures, non-200 statuses and bodies that are not a JSON
    /// array of objects.
    #[instrument(skip(self))]
    pub fn try_get_job_id_list(&self, query: &JobListQuery) -> Result<Vec<JobListEntry>> {
        let timeout = query.timeout.unwrap_or_else(|| self.config.list_timeout());
        let result = self
            .endpoints
            .job_list(query)
            .and_then(|url| self.get_text(url, timeout))
            .and_then(|body| parse_job_list(&body));
        self.observe(RETRIEVE_FAILURE, result)
    }

    /// Save the job's video under `location`; returns the written path.
    pub fn try_download_video(&self, job_id: &str, location: impl AsRef<Path>) -> Result<PathBuf> {
        self.try_download_artifact(ArtifactKind::Video, job_id, location.as_ref())
    }

    /// Save the job's server log under `location`; returns the written path.
    pub fn try_download_log(&self, job_id: &str, location: impl AsRef<Path>) -> Result<PathBuf> {
        self.try_download_artifact(ArtifactKind::Log, job_id, location.as_ref())
    }

    /// Save the `kind` artifact of a job under `location`.
    ///
    /// # Errors
    ///
    /// `Io` for a job id that cannot be a file name or an unwritable
    /// location; any URL, transport, timeout or non-200 failure.
    #[instrument(skip(self, location), fields(location = %location.display()))]
    pub fn try_download_artifact(
        &self,
        kind: ArtifactKind,
        job_id: &str,
        location: &Path,
    ) -> Result<PathBuf> {
        let result = self
            .endpoints
            .artifact(kind, job_id)
            .and_then(|url| self.download(url, job_id, location));
        self.observe(DOWNLOAD_FAILURE, result)
    }

    /* ---------------------------------------------------------------------- */
    /* Degrading operations */
    /* ---------------------------------------------------------------------- */

    /// Raw job JSON, or `""` on any failure.
    pub fn get_job_info(&self, job_id: &str) -> String {
        self.try_get_job_info(job_id).unwrap_or_default()
    }

    /// Raw sub-resource body, or `""` on any failure.
    pub fn retrieve_results(&self, path: &str) -> String {
        self.try_retrieve_results(path).unwrap_or_default()
    }

    /// Send `updates`; failures are recorded and dropped.
    pub fn update_job_info(&self, job_id: &str, updates: &JobUpdate) {
        let _ = self.try_update_job_info(job_id, updates);
    }

    /// Mark the job as passed; failures are recorded and dropped.
    pub fn job_passed(&self, job_id: &str) {
        let _ = self.try_job_passed(job_id);
    }

    /// Mark the job as failed; failures are recorded and dropped.
    pub fn job_failed(&self, job_id: &str) {
        let _ = self.try_job_failed(job_id);
    }

    /// Jobs between `start` and `end`, or an empty list on any failure.
    /// `timeout` defaults to the configured list timeout.
    pub fn get_job_id_list<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
        limit: u32,
        timeout: Option<Duration>,
    ) -> Vec<JobListEntry> {
        let mut query = JobListQuery::new(start, end, limit);
        query.timeout = timeout;
        self.try_get_job_id_list(&query).unwrap_or_default()
    }

    /// Save the job's video under `location`; failures are recorded and
    /// dropped.
    pub fn download_video(&self, job_id: &str, location: impl AsRef<Path>) {
        let _ = self.try_download_video(job_id, location);
    }

    /// Save the job's server log under `location`; failures are recorded and
    /// dropped.
    pub fn download_log(&self, job_id: &str, location: impl AsRef<Path>) {
        let _ = self.try_download_log(job_id, location);
    }

    /* ---------------------------------------------------------------------- */
    /* Internals */
    /* ---------------------------------------------------------------------- */

    fn authorized(&self, method: Method, url: Url, timeout: Duration) -> RequestBuilder {
        self.http
            .request(method, url)
            .timeout(timeout)
            .header(AUTHORIZATION, self.auth_header.clone())
    }

    fn get_ok(&self, url: Url, timeout: Duration) -> Result<Response> {
        let response = self.http.send(self.authorized(Method::GET, url, timeout))?;
        ensure_ok(response)
    }

    fn get_text(&self, url: Url, timeout: Duration) -> Result<String> {
        let response = self.get_ok(url, timeout)?;
        Ok(response.text().map_err(InfraError::from)?)
    }

    fn put_json(&self, url: Url, updates: &JobUpdate) -> Result<()> {
        let body = serde_json::to_vec(updates).map_err(InfraError::from)?;
        let request = self
            .authorized(Method::PUT, url, self.config.update_timeout())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        ensure_ok(self.http.send(request)?)?;
        Ok(())
    }

    fn download(&self, url: Url, job_id: &str, location: &Path) -> Result<PathBuf> {
        ensure_file_safe_job_id(job_id)?;
        let request_url = url.to_string();
        let response = self.get_ok(url, self.config.download_timeout())?;
        let body = response.bytes().map_err(InfraError::from)?;

        let path = artifact_path(location, job_id, &request_url, &Local::now())?;
        write_artifact(&path, &body)?;
        Ok(path)
    }

    fn observe<T>(&self, context: &str, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            warn!(error = %err, kind = err.label(), "{context}");
            self.diagnostics.record(&format!("{context}: {err}"));
        }
        result
    }
}

fn ensure_ok(response: Response) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        Ok(response)
    } else {
        Err(SauceRestError::Status { status: status.as_u16(), url: response.url().to_string() })
    }
}

/// Builder for [`RemoteJobClient`]
#[derive(Default)]
pub struct RemoteJobClientBuilder {
    credentials: Option<Credentials>,
    config: Option<ClientConfig>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl RemoteJobClientBuilder {
    /// Account the client authenticates as. Required.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Endpoints, timeouts and diagnostics settings. Defaults apply when
    /// unset.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Explicit sink; takes precedence over `ClientConfig::diagnostics_path`.
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `SauceRestError::Config` if credentials are missing or the HTTP
    /// transport cannot be created.
    pub fn build(self) -> Result<RemoteJobClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| SauceRestError::Config("Credentials not set".to_string()))?;
        let config = self.config.unwrap_or_default();

        let diagnostics: Arc<dyn DiagnosticSink> = match (self.diagnostics, &config.diagnostics_path)
        {
            (Some(sink), _) => sink,
            (None, Some(path)) => Arc::new(FileDiagnosticSink::new(path.clone())),
            (None, None) => Arc::new(TracingDiagnosticSink),
        };

        let http = HttpClient::builder()
            .timeout(config.download_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(RemoteJobClient {
            endpoints: Endpoints::new(&config, credentials.account_id()),
            auth_header: basic_auth_header(&credentials)?,
            credentials,
            config,
            http,
            diagnostics,
        })
    }
}
