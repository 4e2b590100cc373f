//! Status command implementation

use colored::Colorize;
use serde_json::json;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};
use crate::output::json::format_json;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let file_exists = path.exists();

    let config = match CommandContext::resolve_config(opts) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::ParseError(msg))) => {
            println!("{} Config file could not be parsed: {}", "✗".red(), msg);
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let has_token = config.validate_auth().is_ok();
    let format = OutputFormat::resolve(opts.format, config.preferences.format.as_deref())
        .unwrap_or_else(|err| {
            log::warn!("{}", err);
            OutputFormat::default()
        });
    let expiry = config.token_expiry();

    if format == OutputFormat::Json {
        let status = json!({
            "config_path": path.display().to_string(),
            "config_exists": file_exists,
            "service_url": config.service_url(),
            "main_resource": config.main_resource,
            "token_configured": has_token,
            "token_expires_at": expiry.map(|t| t.to_rfc3339()),
            "token_expired": config.is_token_expired(),
        });
        println!("{}", format_json(&status)?);
        return Ok(());
    }

    println!("{}\n", "teamsop Configuration Status".bold());

    if file_exists {
        println!("Config file: {}", path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            path.display().to_string().cyan(),
            "(not found)".dimmed()
        );
    }
    println!("Service URL: {}", config.service_url());
    if let Some(resource) = config.main_resource.as_deref().filter(|r| !r.is_empty()) {
        println!("Main resource: {}", resource);
    }
    println!();

    if !has_token {
        println!("{} Access token not configured", "✗".red());
        println!("  → Run 'teamsop init' or pass --token");
        return Ok(());
    }

    match expiry {
        Some(expires_at) if config.is_token_expired() => {
            println!(
                "{} Access token expired at {}",
                "⚠".yellow(),
                expires_at.to_rfc3339()
            );
        }
        Some(expires_at) => {
            let remaining = expires_at.signed_duration_since(chrono::Utc::now());
            println!(
                "{} Access token valid (expires in {}h {}m)",
                "✓".green(),
                remaining.num_hours(),
                remaining.num_minutes() % 60
            );
        }
        None => {
            println!(
                "{} Access token configured (expiry unknown)",
                "○".dimmed()
            );
        }
    }

    Ok(())
}
