//! Installed app model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// An app installed in a team
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct App {
    #[serde(deserialize_with = "null_as_default")]
    id: String,

    /// Only populated when the listing expands `teamsAppDefinition`
    #[serde(rename = "teamsAppDefinition", deserialize_with = "null_as_default")]
    app_definition: AppDefinition,
}

/// Catalog definition embedded in an installed app
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppDefinition {
    #[serde(deserialize_with = "null_as_default")]
    id: String,

    #[serde(deserialize_with = "null_as_default")]
    teams_app_id: String,

    #[serde(deserialize_with = "null_as_default")]
    display_name: String,

    #[serde(deserialize_with = "null_as_default")]
    version: String,
}

impl App {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn app_definition(&self) -> &AppDefinition {
        &self.app_definition
    }

    /// Shortcut for the definition's display name
    pub fn display_name(&self) -> &str {
        &self.app_definition.display_name
    }
}

impl AppDefinition {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn teams_app_id(&self) -> &str {
        &self.teams_app_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl PartialEq for App {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for App {}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "App: {}", self.display_name())
    }
}
