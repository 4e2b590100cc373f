//! Common CLI types shared across commands

use clap::ValueEnum;

use crate::error::{ConfigError, Result};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table format - human-readable, one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Pick the format: flag or env first, then the config preference, then table.
    pub fn resolve(flag: Option<OutputFormat>, preferred: Option<&str>) -> Result<OutputFormat> {
        if let Some(format) = flag {
            return Ok(format);
        }

        match preferred.map(str::trim).filter(|p| !p.is_empty()) {
            Some(name) => OutputFormat::from_str(name, true).map_err(|_| {
                ConfigError::Invalid(format!(
                    "preferences.format must be table or json, got '{}'",
                    name
                ))
                .into()
            }),
            None => Ok(OutputFormat::default()),
        }
    }
}
