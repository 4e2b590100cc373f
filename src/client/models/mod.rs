//! Microsoft Graph data models
//!
//! Immutable snapshots of server state. Each entity is built only by
//! deserializing a Graph payload: camelCase keys map onto snake_case fields,
//! and missing or `null` fields fall back to empty defaults. Equality is by
//! `id` alone.

use serde::{Deserialize, Deserializer};

mod app;
mod channel;
mod operation;
mod team;

pub use app::{App, AppDefinition};
pub use channel::Channel;
pub use operation::AsyncOperation;
pub use team::Team;

/// Collection envelope returned by Graph list endpoints (`{"value": [...]}`)
#[derive(Debug, Deserialize)]
pub(crate) struct ValueList<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

/// Deserialize `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
