//! Configuration management for teamsop

use std::path::PathBuf;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default Microsoft Graph host
pub const DEFAULT_API_HOST: &str = "https://graph.microsoft.com";

/// Default Microsoft Graph API version
pub const DEFAULT_API_VERSION: &str = "v1.0";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Bearer token for Microsoft Graph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Graph host, e.g. `https://graph.microsoft.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Graph API version segment, e.g. `v1.0` or `beta`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Resource prefix placed between the service URL and every endpoint path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_resource: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".teamsop").join("config.yaml"))
    }

    /// Resolve an optional override into a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration, falling back to defaults when the file does not exist.
    ///
    /// Lets a command run entirely from `--token` / environment variables.
    pub fn load_or_default_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if path.exists() {
            Self::load_from(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional override path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Token lives in this file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Graph host with any trailing slash removed
    pub fn api_host(&self) -> &str {
        self.api_host
            .as_deref()
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/')
    }

    /// Service URL every endpoint path is appended to, e.g. `https://graph.microsoft.com/v1.0`
    pub fn service_url(&self) -> String {
        let version = self
            .api_version
            .as_deref()
            .unwrap_or(DEFAULT_API_VERSION)
            .trim_matches('/');
        format!("{}/{}", self.api_host(), version)
    }

    /// HTTP request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.preferences.timeout_secs)
    }

    /// Reject settings no request could succeed with
    pub fn validate(&self) -> Result<()> {
        if self.preferences.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "preferences.timeout_secs must be at least 1".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Validate that a token is present
    pub fn validate_auth(&self) -> Result<()> {
        match self.access_token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingToken.into()),
        }
    }

    /// Expiry decoded from the token's `exp` claim.
    ///
    /// Graph access tokens are JWTs, but the payload is never verified here;
    /// `None` means the token is absent or not a readable JWT.
    pub fn token_expiry(&self) -> Option<DateTime<Utc>> {
        #[derive(Deserialize)]
        struct JwtPayload {
            exp: i64,
        }

        let token = self.access_token.as_deref()?;
        let payload_b64 = token.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload_b64.trim_end_matches('='))
            .ok()?;
        let payload: JwtPayload = serde_json::from_slice(&bytes).ok()?;
        DateTime::from_timestamp(payload.exp, 0)
    }

    /// True when the token's `exp` claim is in the past.
    ///
    /// Tokens without a readable expiry are treated as not expired and left
    /// for the server to reject.
    pub fn is_token_expired(&self) -> bool {
        self.token_expiry()
            .is_some_and(|expires_at| expires_at < Utc::now())
    }
}
