//! Team commands

use std::time::Duration;

use chrono::{DateTime, Utc};
use colored::Colorize;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::ArchiveOutcome;
use crate::client::models::{AsyncOperation, Team};
use crate::error::{ApiError, Result};
use crate::output;

/// Team for table display
#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "TEAM ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "ARCHIVED")]
    archived: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

impl From<&Team> for TeamRow {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.display_name().to_string(),
            archived: if team.is_archived() { "yes" } else { "no" }.to_string(),
            description: truncate(team.description(), 50),
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

fn team_fields(team: &Team) -> Vec<(&'static str, String)> {
    vec![
        ("ID", team.id().to_string()),
        ("Name", team.display_name().to_string()),
        ("Description", team.description().to_string()),
        ("Archived", team.is_archived().to_string()),
        ("Web URL", team.web_url().to_string()),
    ]
}

fn operation_fields(op: &AsyncOperation) -> Vec<(&'static str, String)> {
    let error = if op.error().is_null() {
        String::new()
    } else {
        op.error().to_string()
    };

    vec![
        ("Operation ID", op.id().to_string()),
        ("Type", op.operation_type().to_string()),
        ("Status", op.status().to_string()),
        ("Attempts", op.attempts_count().to_string()),
        ("Created", timestamp(op.created_at(), op.created_date_time())),
        ("Last action", timestamp(op.last_action_at(), op.last_action_date_time())),
        ("Target", op.target_resource_location().to_string()),
        ("Error", error),
    ]
}

/// Normalized RFC 3339 when parseable, the raw server value otherwise
fn timestamp(parsed: Option<DateTime<Utc>>, raw: &str) -> String {
    parsed.map_or_else(|| raw.to_string(), |dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Run the team list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let Some(teams) = ctx.teams.list_my_teams().await? else {
        output::print_no_response("joined teams");
        return Ok(());
    };

    output::print_list::<Team, TeamRow>(&teams, ctx.format)
}

/// Run the team create command
pub async fn create(opts: &GlobalOptions, group_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let Some(team) = ctx.teams.create_team(group_id).await? else {
        output::print_no_response(&format!("team creation under group {}", group_id));
        return Ok(());
    };

    output::print_item(&team, "Team created", &team_fields(&team), ctx.format)
}

/// Run the team archive command
pub async fn archive(
    opts: &GlobalOptions,
    team_id: &str,
    read_only_for_members: bool,
    yes: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes {
        eprintln!(
            "{} Archive team {}? Members will no longer be able to post.",
            "⚠".yellow(),
            team_id.bold()
        );
        let confirmed = Confirm::new()
            .with_prompt("Proceed?")
            .default(false)
            .interact()?;
        if !confirmed {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let pb = spinner("Submitting archive request...");
    let outcome = ctx.teams.archive_team(team_id, read_only_for_members).await;
    pb.finish_and_clear();

    report_outcome(outcome?, &ctx, "archive", team_id)
}

/// Run the team unarchive command
pub async fn unarchive(opts: &GlobalOptions, team_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let pb = spinner("Submitting unarchive request...");
    let outcome = ctx.teams.unarchive_team(team_id).await;
    pb.finish_and_clear();

    report_outcome(outcome?, &ctx, "unarchive", team_id)
}

fn report_outcome(
    outcome: Option<ArchiveOutcome>,
    ctx: &CommandContext,
    action: &str,
    team_id: &str,
) -> Result<()> {
    match outcome {
        None => {
            output::print_no_response(&format!("{} of team {}", action, team_id));
            Ok(())
        }
        Some(ArchiveOutcome::Unexpected(status)) => Err(ApiError::UnexpectedStatus(status).into()),
        Some(ArchiveOutcome::Completed(op)) => {
            output::print_item(
                &op,
                &format!("Team {} accepted", action),
                &operation_fields(&op),
                ctx.format,
            )?;

            if !op.is_terminal() {
                eprintln!(
                    "{} Operation is {}; it continues on the server.",
                    "○".dimmed(),
                    if op.status().is_empty() {
                        "pending"
                    } else {
                        op.status()
                    }
                );
            }
            Ok(())
        }
    }
}
