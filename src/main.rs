mod commands;

use std::net::IpAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

// ============================================================================
// CLI Types
// ============================================================================

/// Agentry - same-origin proxy and terminal dashboard for the agents storefront API
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the proxy server
    Serve {
        /// Path to configuration file
        #[arg(short, long, default_value = "agentry.yaml")]
        config: String,

        /// Host to bind to (overrides config file)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Browse the agent storefront
    Store {
        /// Page to open
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Proxy server URL
        #[arg(short, long, default_value = DEFAULT_SERVER)]
        server: String,
    },

    /// Show the fetched agents ranked by token count
    Leaderboard {
        /// Proxy server URL
        #[arg(short, long, default_value = DEFAULT_SERVER)]
        server: String,
    },

    /// Show one agent in full
    Show {
        /// Agent id to look up
        agent_id: String,

        /// Proxy server URL
        #[arg(short, long, default_value = DEFAULT_SERVER)]
        server: String,
    },

    /// Chat with an agent
    Chat {
        /// Agent id to chat with
        agent_id: String,

        /// Wallet address identifying the user
        #[arg(short, long)]
        wallet: String,

        /// Message to send before the interactive prompt opens
        #[arg(short, long)]
        message: Option<String>,

        /// Proxy server URL
        #[arg(short, long, default_value = DEFAULT_SERVER)]
        server: String,
    },

    /// Look up a wallet's token balance
    Account {
        /// Wallet address to look up
        wallet: String,

        /// Create the account first if it does not exist yet
        #[arg(long)]
        create: bool,

        /// Proxy server URL
        #[arg(short, long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

// ============================================================================
// Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> std::process::ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, host, port } => commands::serve::run(&config, host, port).await,
        Commands::Store { page, server } => commands::store::run(page, &server).await,
        Commands::Leaderboard { server } => commands::leaderboard::run(&server).await,
        Commands::Show { agent_id, server } => commands::show::run(&agent_id, &server).await,
        Commands::Chat {
            agent_id,
            wallet,
            message,
            server,
        } => commands::chat::run(&agent_id, &wallet, message.as_deref(), &server).await,
        Commands::Account {
            wallet,
            create,
            server,
        } => commands::account::run(&wallet, create, &server).await,
    }
}

// ============================================================================
// Initialization
// ============================================================================

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
