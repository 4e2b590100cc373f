//! Error types for teamsop
//!
//! Graph failures that merely mean "nothing came back" are not errors here;
//! the facade reports those as `Ok(None)`. What remains are problems the
//! caller has to act on: bad arguments, undecodable payloads, config trouble.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Required identifier missing or blank. Raised before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Declared facade operation with no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// Failures talking to Microsoft Graph
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid Graph response: {0}")]
    InvalidResponse(String),

    /// Archive/unarchive answered with something other than 202 Accepted
    #[error("Microsoft Graph answered with HTTP {0}")]
    UnexpectedStatus(u16),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            "request to Microsoft Graph timed out".to_string()
        } else if err.is_connect() {
            "could not connect to Microsoft Graph".to_string()
        } else if err.is_builder() {
            format!("could not build HTTP client: {}", err)
        } else {
            err.to_string()
        };
        ApiError::Network(detail)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No config file found. Run `teamsop init` first.")]
    NotFound,

    #[error("Config file is not valid YAML: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Could not write config file: {0}")]
    SaveError(String),

    #[error("Access token not configured. Run `teamsop init` or pass --token.")]
    MissingToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
