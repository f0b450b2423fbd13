//! Job update and listing types

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// One row of a job-list response.
pub type JobListEntry = BTreeMap<String, String>;

/// Field updates for a single job, serialized as a JSON object.
///
/// Keys keep the order in which they were first set. No schema is enforced;
/// callers may set any job field the service accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JobUpdate {
    fields: Map<String, Value>,
}

impl JobUpdate {
    /// An update with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// The `{"passed": <bool>}` update used to mark a job's outcome.
    pub fn passed(passed: bool) -> Self {
        Self::new().with("passed", passed)
    }

    /// Builder form of [`JobUpdate::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, replacing (in place) and returning any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Value currently set for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields set.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for JobUpdate
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut update = Self::new();
        for (key, value) in iter {
            update.insert(key, value);
        }
        update
    }
}
