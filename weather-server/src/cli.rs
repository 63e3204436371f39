use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use weather_core::{Config, NwsClient, WeatherService};

use crate::routes;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather forecast HTTP service")]
pub struct Cli {
    /// Path to a TOML configuration file; built-in defaults apply when absent.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listen address, overriding the configuration file.
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();

        let config = Config::load(self.config.as_deref())?;
        let bind = self.bind.unwrap_or(config.server.bind);

        let client = NwsClient::new(&config.upstream)
            .context("Failed to construct the upstream forecast client")?;
        let service = Arc::new(WeatherService::new(Box::new(client)));

        let path = config.server.path.clone();
        tracing::info!("weather endpoint ready at http://{bind}/{path}");

        warp::serve(routes::weather(path, service)).run(bind).await;

        Ok(())
    }
}
