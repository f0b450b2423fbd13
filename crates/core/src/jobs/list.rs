//! Job-list query building and response parsing

use std::time::Duration;

use chrono::{DateTime, TimeZone};
use saucerest_domain::constants::ERROR_MARKER;
use saucerest_domain::{JobListEntry, Result, SauceRestError};
use serde_json::{Map, Value};
use tracing::warn;

/// Whole seconds since 1970-01-01T00:00:00Z, rounded toward negative
/// infinity.
pub fn unix_seconds<Tz: TimeZone>(at: &DateTime<Tz>) -> i64 {
    at.timestamp()
}

/// A `jobs?from=&to=&limit=` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobListQuery {
    /// Window start, Unix seconds.
    pub from: i64,
    /// Window end, Unix seconds.
    pub to: i64,
    /// Maximum number of jobs returned.
    pub limit: u32,
    /// Overrides the configured list timeout when set.
    pub timeout: Option<Duration>,
}

impl JobListQuery {
    /// Window from `start` to `end`, at most `limit` jobs.
    pub fn new<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>, limit: u32) -> Self {
        Self { from: unix_seconds(start), to: unix_seconds(end), limit, timeout: None }
    }

    /// Use `timeout` instead of the configured list timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Query string in the order the service documents it.
    pub fn query_string(&self) -> String {
        format!("from={}&to={}&limit={}", self.from, self.to, self.limit)
    }
}

/// Parse a job-list body into ordered entries.
///
/// A body containing `error` anywhere yields an empty list rather than an
/// error; the service reports failures that way and callers have always
/// received nothing for them.
///
/// # Errors
/// Returns `SauceRestError::Serialization` if the body is not a JSON array of
/// objects.
pub fn parse_job_list(body: &str) -> Result<Vec<JobListEntry>> {
    if body.contains(ERROR_MARKER) {
        warn!(body_len = body.len(), "job list response signalled an error; returning no jobs");
        return Ok(Vec::new());
    }

    let rows: Vec<Map<String, Value>> = serde_json::from_str(body)
        .map_err(|e| SauceRestError::Serialization(format!("Invalid job list: {e}")))?;

    Ok(rows.into_iter().map(flatten_row).collect())
}

fn flatten_row(row: Map<String, Value>) -> JobListEntry {
    row.into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key, text)
        })
        .collect()
}
