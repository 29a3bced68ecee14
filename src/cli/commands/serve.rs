use clap::Args;

use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, help = "Port to listen on (overrides API_PORT)")]
    pub port: Option<u16>,

    #[arg(long, help = "Database URL (overrides DATABASE_URL)")]
    pub database_url: Option<String>,
}

pub async fn handle(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    tracing::info!("Starting Terminology Hub in {:?} mode", config.environment);
    crate::app::serve(&config).await
}
