use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use annual_leave_engine::api::{AppState, create_router};
use annual_leave_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/kr_annual_leave";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("LEAVE_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading leave policy from {}", config_dir))?;
    info!(
        policy = %config.policy().code,
        version = %config.policy().version,
        "Loaded leave policy"
    );

    let addr: SocketAddr = env::var("LEAVE_ENGINE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .context("parsing LEAVE_ENGINE_ADDR")?;

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
