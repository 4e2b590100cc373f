//! JSON output: Graph payloads wrapped in a `{data, meta}` envelope

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What `--format json` prints
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    /// Serialized as RFC 3339
    pub generated_at: DateTime<Utc>,
    pub version: &'static str,
}

impl<T> Envelope<T> {
    pub fn wrap(data: T) -> Self {
        Self {
            data,
            meta: Meta {
                generated_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Pretty-print `data` inside the envelope. Entities keep Graph's camelCase keys.
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope::wrap(data))
}
