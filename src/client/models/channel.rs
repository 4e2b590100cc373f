//! Channel model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A channel within a team
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Channel {
    #[serde(deserialize_with = "null_as_default")]
    id: String,

    #[serde(deserialize_with = "null_as_default")]
    display_name: String,

    #[serde(deserialize_with = "null_as_default")]
    description: String,

    /// Address for posting to the channel by mail; empty when Graph has none
    #[serde(deserialize_with = "null_as_default")]
    email: String,
}

impl Channel {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Channel {}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel: {}", self.display_name)
    }
}
