//! Channel commands

use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::models::Channel;
use crate::error::Result;
use crate::output;

/// Channel for table display
#[derive(Tabled)]
struct ChannelRow {
    #[tabled(rename = "CHANNEL ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
}

impl From<&Channel> for ChannelRow {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id().to_string(),
            name: channel.display_name().to_string(),
            email: channel.email().to_string(),
        }
    }
}

fn channel_fields(channel: &Channel) -> Vec<(&'static str, String)> {
    vec![
        ("ID", channel.id().to_string()),
        ("Name", channel.display_name().to_string()),
        ("Description", channel.description().to_string()),
        ("Email", channel.email().to_string()),
    ]
}

/// Run the channel list command
pub async fn list(opts: &GlobalOptions, team_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let Some(channels) = ctx.teams.list_channels(team_id).await? else {
        output::print_no_response(&format!("channels of team {}", team_id));
        return Ok(());
    };

    output::print_list::<Channel, ChannelRow>(&channels, ctx.format)
}

/// Run the channel create command
pub async fn create(
    opts: &GlobalOptions,
    team_id: &str,
    name: &str,
    description: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let Some(channel) = ctx.teams.create_channel(team_id, name, description).await? else {
        output::print_no_response(&format!("channel creation in team {}", team_id));
        return Ok(());
    };

    output::print_item(
        &channel,
        "Channel created",
        &channel_fields(&channel),
        ctx.format,
    )
}

/// Run the channel get command
pub async fn get(opts: &GlobalOptions, team_id: &str, channel_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let Some(channel) = ctx.teams.get_channel_info(team_id, channel_id).await? else {
        output::print_no_response(&format!("channel {}", channel_id));
        return Ok(());
    };

    output::print_item(
        &channel,
        &channel.to_string(),
        &channel_fields(&channel),
        ctx.format,
    )
}
