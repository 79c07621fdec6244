//! svgl-extension entry point.
//!
//! Runs the logo search as a launcher extension speaking line-delimited JSON
//! on stdio. Logging goes to stderr to avoid interfering with the protocol on
//! stdout.

use anyhow::{Context, Result};
use svgl_client::SearchPipeline;
use svgl_core::AppConfig;
use tokio::io::{BufReader, stdin, stdout};
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod protocol;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load().context("loading configuration")?;

    tracing::info!(
        api = %config.api_base_url,
        cache_dir = %config.cache_dir.display(),
        "Starting svgl extension on stdio"
    );

    let pipeline = SearchPipeline::from_config(&config).context("building search pipeline")?;
    let handler = handler::ExtensionHandler::new(pipeline);

    handler.run(BufReader::new(stdin()), stdout()).await?;

    Ok(())
}
