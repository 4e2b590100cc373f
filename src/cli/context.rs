//! Command execution context
//!
//! Loads config, applies CLI overrides, and wires the HTTP transport into a
//! Teams facade so command handlers start from a ready client.

use std::sync::Arc;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{GraphContext, HttpTransport, Teams, TeamsBuilder};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution
pub struct CommandContext {
    /// Config with CLI/env overrides already applied
    pub config: Config,
    /// Teams facade over the authenticated transport
    pub teams: Teams,
    /// Output format after flag, env and config preference are applied
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build the context for a command.
    ///
    /// A missing config file is fine as long as a token arrives via
    /// `--token` or `TEAMSOP_TOKEN`.
    ///
    /// # Errors
    /// Returns error if the config cannot be parsed or holds invalid settings,
    /// no token is available, or the HTTP client cannot be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Self::resolve_config(opts)?;
        config.validate()?;
        config.validate_auth()?;
        let format = OutputFormat::resolve(opts.format, config.preferences.format.as_deref())?;

        if config.is_token_expired() {
            log::warn!("Access token has expired; Graph will likely reject requests");
        }

        let token = config.access_token.clone().unwrap_or_default();
        let transport = HttpTransport::new(token, config.timeout())?;

        let graph = GraphContext::new(Arc::new(transport), config.service_url())
            .with_main_resource(config.main_resource.clone().unwrap_or_default());
        let teams = TeamsBuilder::new().parent(graph).build()?;
        log::debug!("Using {:?}", teams);

        Ok(Self {
            config,
            teams,
            format,
        })
    }

    /// Load config (or defaults) and layer CLI/env overrides on top
    pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
        let mut config = Config::load_or_default_at(opts.config_ref())?;

        if let Some(token) = &opts.token {
            config.access_token = Some(token.clone());
        }
        if let Some(host) = &opts.api_host {
            config.api_host = Some(host.clone());
        }

        Ok(config)
    }
}
