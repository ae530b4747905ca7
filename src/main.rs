use std::error::Error;

use figma_context_engine::telemetry;
use tracing::{Level, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // `.env` is optional; real environment variables win.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("info", Level::DEBUG))
        .with(telemetry::layer())
        .try_init()?;

    info!(version = env!("CARGO_PKG_VERSION"), "starting figma codegen backend");

    api::start().await?;

    Ok(())
}
