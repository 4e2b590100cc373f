//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod app;
pub mod args;
pub mod channel;
pub mod context;
pub mod init;
pub mod status;
pub mod team;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// teamsop - command-line companion for Microsoft Teams
#[derive(Parser, Debug)]
#[command(name = "teamsop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json); falls back to `preferences.format`, then table
    #[arg(long, global = true, env = "TEAMSOP_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "TEAMSOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Microsoft Graph access token (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "TEAMSOP_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Microsoft Graph host, e.g. https://graph.microsoft.com
    #[arg(long, global = true, env = "TEAMSOP_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TEAMSOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store an access token in the config file
    Init,

    /// Show configuration and token status
    Status,

    /// Display version information
    Version,

    /// Manage teams
    #[command(subcommand)]
    Team(TeamCommands),

    /// Manage channels within a team
    #[command(subcommand)]
    Channel(ChannelCommands),

    /// Inspect apps installed in a team
    #[command(subcommand)]
    App(AppCommands),

    /// Generate shell completions
    #[command(after_help = "\
  bash:   teamsop completion bash > /etc/bash_completion.d/teamsop
  zsh:    teamsop completion zsh > \"${fpath[1]}/_teamsop\"
  fish:   teamsop completion fish > ~/.config/fish/completions/teamsop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Team subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List the teams you are a member of
    #[command(visible_alias = "ls")]
    List,

    /// Create a team for an existing Microsoft 365 group
    Create {
        /// Group ID the team is created under
        group_id: String,
    },

    /// Archive a team (read-only for everyone)
    #[command(after_help = "EXAMPLES:\n  \
            teamsop team archive <team-id>                           # Prompt first\n  \
            teamsop team archive <team-id> --yes                     # No prompt\n  \
            teamsop team archive <team-id> --read-only-for-members   # Lock SharePoint site too")]
    Archive {
        /// Team ID
        team_id: String,

        /// Also make the team's SharePoint site read-only for members
        #[arg(long)]
        read_only_for_members: bool,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Restore an archived team
    Unarchive {
        /// Team ID
        team_id: String,
    },
}

/// Channel subcommands
#[derive(Subcommand, Debug)]
pub enum ChannelCommands {
    /// List channels in a team
    #[command(visible_alias = "ls")]
    List {
        /// Team ID
        team_id: String,
    },

    /// Create a channel in a team
    Create {
        /// Team ID
        team_id: String,

        /// Channel display name
        name: String,

        /// Channel description
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Show a single channel
    #[command(visible_alias = "g")]
    Get {
        /// Team ID
        team_id: String,

        /// Channel ID
        channel_id: String,
    },
}

/// App subcommands
#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// List apps installed in a team
    #[command(visible_alias = "ls")]
    List {
        /// Team ID
        team_id: String,
    },
}
