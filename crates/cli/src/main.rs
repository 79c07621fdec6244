//! svgl command-line entry point.
//!
//! Runs a single keyword query through the same pipeline the extension uses
//! and prints the result list. Handy for checking the API and the cache
//! without a launcher.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use svgl_client::SearchPipeline;
use svgl_core::{AppConfig, RenderResultList};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "svgl")]
#[command(about = "Search SVGL logos and cache their SVGs", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Print the result list as JSON
    #[arg(long)]
    json: bool,

    /// Override the cache directory
    #[arg(long, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Override how many results are shown
    #[arg(short = 'n', long, value_name = "N")]
    limit: Option<usize>,

    /// Search text; empty shows the hint
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { EnvFilter::new("debug") } else { EnvFilter::from_default_env() };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::load().context("loading configuration")?;
    if let Some(dir) = cli.cache_dir {
        config.cache_dir = dir;
    }
    if let Some(limit) = cli.limit {
        config.result_limit = limit;
    }
    config.validate().context("validating configuration")?;

    let pipeline = SearchPipeline::from_config(&config).context("building search pipeline")?;
    let query = cli.query.join(" ");
    let list = pipeline.handle(Some(query.as_str())).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        print_table(&list);
    }

    Ok(())
}

fn print_table(list: &RenderResultList) {
    for (idx, item) in list.items.iter().enumerate() {
        println!("{:>2}. {}", idx + 1, item.name);
        if !item.description.is_empty() {
            println!("    {}", item.description);
        }
        if item.is_placeholder() {
            continue;
        }
        let copied = item.payload().map(|p| format!("{} bytes", p.len())).unwrap_or_else(|| "-".into());
        println!("    icon: {}  copy: {}", item.icon.display(), copied);
    }
}
