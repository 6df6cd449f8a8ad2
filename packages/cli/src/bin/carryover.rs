use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use carryover_cli::config::parse_port;
use carryover_cli::{init_tracing, run_server, Config};
use carryover_client::ApiClient;
use carryover_core::SystemClock;
use clap::{Parser, Subcommand};
use colored::*;

mod cli;

use cli::notes::NotesCommands;
use cli::tasks::TasksCommands;

#[derive(Parser)]
#[command(name = "carryover")]
#[command(about = "Carryover - daily tasks that roll forward until they are done")]
#[command(version)]
struct Cli {
    /// API base URL for task and note commands (overrides CARRYOVER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long, value_parser = parse_port)]
        port: Option<u16>,
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,
        /// SQLite database file (overrides DATABASE_PATH)
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Manage tasks on a running server
    #[command(subcommand)]
    Tasks(TasksCommands),
    /// Manage notes on a running server
    #[command(subcommand)]
    Notes(NotesCommands),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    init_tracing(default_filter);

    if let Err(e) = handle_command(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    match cli.command {
        Commands::Serve {
            port,
            host,
            database,
        } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(database) = database {
                config.database_path = database;
            }

            println!(
                "{} http://{}:{}",
                "Starting Carryover on".green().bold(),
                config.host,
                config.port
            );
            run_server(&config).await
        }
        Commands::Tasks(command) => {
            let client = ApiClient::new(&config.api_url)?;
            cli::tasks::handle_tasks_command(command, client, Arc::new(SystemClock)).await
        }
        Commands::Notes(command) => {
            let client = ApiClient::new(&config.api_url)?;
            cli::notes::handle_notes_command(command, client, Arc::new(SystemClock)).await
        }
    }
}
