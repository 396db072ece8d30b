use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use caching_proxy::config::{load_config, ProxyConfig};
use caching_proxy::lifecycle::Shutdown;
use caching_proxy::net::Listener;
use caching_proxy::proxy::ProxyServer;

#[derive(Parser)]
#[command(name = "caching-proxy")]
#[command(about = "Caching forward HTTP/1.0 proxy", long_about = None)]
struct Cli {
    /// Port to listen on
    port: u16,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caching_proxy=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    // The positional port always wins over the config file.
    config.listener.bind_address = format!("0.0.0.0:{}", cli.port);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        cache_capacity_bytes = config.cache.capacity_bytes,
        max_object_bytes = config.cache.max_object_bytes,
        "Configuration loaded"
    );

    let listener = Listener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(shutdown.listen_for_ctrl_c());

    ProxyServer::new(config).run(listener, shutdown_rx).await;

    tracing::info!("Shutdown complete");
    Ok(())
}
