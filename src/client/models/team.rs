//! Team model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A Microsoft Teams team
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    #[serde(deserialize_with = "null_as_default")]
    id: String,

    #[serde(deserialize_with = "null_as_default")]
    display_name: String,

    #[serde(deserialize_with = "null_as_default")]
    description: String,

    #[serde(deserialize_with = "null_as_default")]
    is_archived: bool,

    #[serde(deserialize_with = "null_as_default")]
    web_url: String,
}

impl Team {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_archived(&self) -> bool {
        self.is_archived
    }

    pub fn web_url(&self) -> &str {
        &self.web_url
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team: {}", self.display_name)
    }
}
