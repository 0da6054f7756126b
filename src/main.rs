use std::env;
use std::net::SocketAddr;

use demand_engine::api::{create_router, AppState};
use demand_engine::config::ConfigLoader;
use demand_engine::telemetry;
use tracing::info;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = env::var("DEMAND_ENGINE_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    telemetry::init(&log_level)?;

    let config_dir =
        env::var("DEMAND_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr: SocketAddr = env::var("DEMAND_ENGINE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        rounding = ?config.rounding(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Demand engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
