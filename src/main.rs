//! HTTP server for the Quote Pricing Engine.
//!
//! Environment:
//! - `QUOTE_ENGINE_CONFIG`: configuration directory (default `./config/default`)
//! - `PORT`: listen port (default 3000)
//! - `RUST_LOG`: tracing filter (default `quote_engine=info,info`)

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use quote_engine::api::{AppState, create_router};
use quote_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_PORT: u16 = 3000;

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quote_engine=info,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let config_dir =
        std::env::var("QUOTE_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        code = %config.engine().code,
        version = %config.engine().version,
        "Configuration loaded"
    );

    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse::<u16>()?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Quote engine listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
