//! Installed app commands

use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::models::App;
use crate::error::Result;
use crate::output;

/// Installed app for table display
#[derive(Tabled)]
struct AppRow {
    #[tabled(rename = "INSTALLATION ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TEAMS APP ID")]
    teams_app_id: String,
    #[tabled(rename = "VERSION")]
    version: String,
}

impl From<&App> for AppRow {
    fn from(app: &App) -> Self {
        let definition = app.app_definition();
        Self {
            id: app.id().to_string(),
            name: app.display_name().to_string(),
            teams_app_id: definition.teams_app_id().to_string(),
            version: definition.version().to_string(),
        }
    }
}

/// Run the app list command
pub async fn list(opts: &GlobalOptions, team_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let Some(apps) = ctx.teams.list_installed_apps(team_id).await? else {
        output::print_no_response(&format!("apps installed in team {}", team_id));
        return Ok(());
    };

    output::print_list::<App, AppRow>(&apps, ctx.format)
}
