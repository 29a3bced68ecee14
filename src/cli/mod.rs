pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "hub")]
#[command(about = "Terminology Hub CLI - serve the API or curate concepts on a running server")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        env = "HUB_URL",
        default_value = "http://127.0.0.1:8000",
        help = "Base URL of the Terminology Hub server"
    )]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve {
        #[command(flatten)]
        args: commands::serve::ServeArgs,
    },

    #[command(about = "Concept operations against a running server")]
    Concept {
        #[command(subcommand)]
        cmd: commands::concept::ConceptCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Serve { args } => commands::serve::handle(args).await,
        Commands::Concept { cmd } => {
            let client = client::HubClient::new(&cli.server)?;
            commands::concept::handle(cmd, &client, output_format).await
        }
    }
}
