//! teamsop - command-line companion for Microsoft Teams over Microsoft Graph

use std::io;

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod output;

use cli::{AppCommands, ChannelCommands, Cli, Commands, GlobalOptions, TeamCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("teamsop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Team(team_cmd) => match team_cmd {
            TeamCommands::List => cli::team::list(&opts).await,
            TeamCommands::Create { group_id } => cli::team::create(&opts, &group_id).await,
            TeamCommands::Archive {
                team_id,
                read_only_for_members,
                yes,
            } => cli::team::archive(&opts, &team_id, read_only_for_members, yes).await,
            TeamCommands::Unarchive { team_id } => cli::team::unarchive(&opts, &team_id).await,
        },
        Commands::Channel(channel_cmd) => match channel_cmd {
            ChannelCommands::List { team_id } => cli::channel::list(&opts, &team_id).await,
            ChannelCommands::Create {
                team_id,
                name,
                description,
            } => cli::channel::create(&opts, &team_id, &name, description.as_deref()).await,
            ChannelCommands::Get {
                team_id,
                channel_id,
            } => cli::channel::get(&opts, &team_id, &channel_id).await,
        },
        Commands::App(app_cmd) => match app_cmd {
            AppCommands::List { team_id } => cli::app::list(&opts, &team_id).await,
        },
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "teamsop", &mut io::stdout());
            Ok(())
        }
    }
}
