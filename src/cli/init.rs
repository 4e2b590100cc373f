//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Password, theme::ColorfulTheme};

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::{HttpTransport, TeamsBuilder};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for a Graph access token, checks it by listing joined teams, and
/// saves it to the config file. `--api-host` given here is saved as well.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to teamsop!".bold().green());
    println!("Paste a Microsoft Graph access token with Team.ReadBasic.All and Channel.ReadBasic.All.\n");

    let mut config = CommandContext::resolve_config(opts)?;
    config.validate()?;

    let token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Access token")
        .interact()?;
    config.access_token = Some(token.trim().to_string());

    if let Some(expires_at) = config.token_expiry() {
        println!("Token expires at {}", expires_at.to_rfc3339().cyan());
    }

    println!("\n{}", "Verifying token...".cyan());
    if verify(&config).await? {
        println!("{}", "✓ Token accepted by Microsoft Graph".green());
    } else {
        println!("{}", "⚠ Could not verify the token.".yellow());
        let save_anyway = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Save it anyway?")
            .default(false)
            .interact()?;
        if !save_anyway {
            println!("Nothing saved.");
            return Ok(());
        }
    }

    config.save_at(opts.config_ref())?;
    let path = Config::resolve_path(opts.config_ref())?;
    println!("\nConfiguration saved to {}", path.display().to_string().cyan());

    Ok(())
}

/// True when listing joined teams gets a response
async fn verify(config: &Config) -> Result<bool> {
    let transport = HttpTransport::new(
        config.access_token.clone().unwrap_or_default(),
        config.timeout(),
    )?;
    let teams = TeamsBuilder::new()
        .transport(std::sync::Arc::new(transport))
        .service_url(config.service_url())
        .main_resource(config.main_resource.clone().unwrap_or_default())
        .build()?;

    match teams.list_my_teams().await? {
        Some(joined) => {
            println!("Found {} joined team(s).", joined.len());
            Ok(true)
        }
        None => Ok(false),
    }
}
