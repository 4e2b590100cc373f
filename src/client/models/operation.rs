//! Long-running team operation model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Status resource for a server-side team operation (archive, unarchive, clone, ...)
///
/// A snapshot taken when the status URL was fetched; the operation may still
/// be running.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AsyncOperation {
    #[serde(deserialize_with = "null_as_default")]
    id: String,

    #[serde(deserialize_with = "null_as_default")]
    operation_type: String,

    #[serde(deserialize_with = "null_as_default")]
    created_date_time: String,

    #[serde(deserialize_with = "null_as_default")]
    last_action_date_time: String,

    /// notStarted, inProgress, succeeded or failed
    #[serde(deserialize_with = "null_as_default")]
    status: String,

    #[serde(deserialize_with = "null_as_default")]
    attempts_count: u32,

    #[serde(deserialize_with = "null_as_default")]
    target_resource_id: String,

    #[serde(deserialize_with = "null_as_default")]
    target_resource_location: String,

    #[serde(deserialize_with = "null_as_default")]
    error: serde_json::Value,
}

impl AsyncOperation {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn operation_type(&self) -> &str {
        &self.operation_type
    }

    pub fn created_date_time(&self) -> &str {
        &self.created_date_time
    }

    pub fn last_action_date_time(&self) -> &str {
        &self.last_action_date_time
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn attempts_count(&self) -> u32 {
        self.attempts_count
    }

    pub fn target_resource_id(&self) -> &str {
        &self.target_resource_id
    }

    pub fn target_resource_location(&self) -> &str {
        &self.target_resource_location
    }

    /// Raw error payload; `Value::Null` when the operation reported none
    pub fn error(&self) -> &serde_json::Value {
        &self.error
    }

    /// Creation time, if the server sent a parseable RFC 3339 timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_date_time)
    }

    /// Last action time, if the server sent a parseable RFC 3339 timestamp
    pub fn last_action_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_action_date_time)
    }

    /// Whether the operation has reached `succeeded` or `failed`
    pub fn is_terminal(&self) -> bool {
        self.status.eq_ignore_ascii_case("succeeded") || self.status.eq_ignore_ascii_case("failed")
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

impl PartialEq for AsyncOperation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AsyncOperation {}

impl fmt::Display for AsyncOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team Async: {}", self.operation_type)
    }
}
