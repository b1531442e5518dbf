mod blob_id;
mod config;
mod error;
mod github;
mod http;
mod logger;
mod server;
mod upload;

use anyhow::{Context, Result};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().await.context("Cannot load config file")?;
    logger::init(config.log_level.into())?;

    log::info!("Starting");
    server::run(&config)
        .await
        .context("Cannot run the upload relay")?;

    Ok(())
}
