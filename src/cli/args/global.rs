//! Global CLI options shared across all commands
//!
//! Precedence is CLI flag > environment variable > config file > default.
//! This struct captures the CLI/env layer; the config file is merged in
//! `CommandContext`.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format from `--format` / `TEAMSOP_FORMAT`, if given
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.teamsop/config.yaml)
    pub config: Option<String>,

    /// Access token override
    pub token: Option<String>,

    /// Graph host override for development/testing
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            token: cli.token.clone(),
            api_host: cli.api_host.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
