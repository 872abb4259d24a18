//! Command-line entry point for evolution chain resolution.
//!
//! Resolves one evolution chain through `evochain-core` and emits the
//! resulting creatures and evolution links as JSON. Persisting that output is
//! left to whatever consumes it.
//!
//! # Architecture
//!
//! ```text
//! chain id --> EvolutionService --> CreatureGraph --> JSON (stdout or file)
//! ```
//!
//! Logs go to stderr so stdout carries only the JSON document.

mod cli;
mod error;
mod output;

use std::path::Path;

use clap::Parser;
use evochain_core::{CoreConfig, EvolutionService, Fetcher, MemoryFetcher};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::ChainOutput;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// resolves the requested chain and writes the JSON output.
///
/// # Errors
///
/// Returns an error if configuration, resolution or output fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();
    run(&cli).await?;
    Ok(())
}

/// Install the tracing subscriber. `EVOCHAIN_LOG_FORMAT=json` selects JSON lines.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("EVOCHAIN_LOG_FORMAT").is_ok_and(|format| format == "json");

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = CoreConfig::from_env()?;
    info!(
        api_url = config.api_url,
        request_timeout_ms = config.request_timeout_ms,
        max_concurrent_fetches = config.max_concurrent_fetches,
        max_chain_depth = config.max_chain_depth,
        "configuration loaded"
    );

    let service = match &cli.fixtures {
        Some(path) => {
            config.validate()?;
            let fetcher = load_fixtures(path)?;
            info!(path = %path.display(), "serving documents from fixtures");
            EvolutionService::with_fetcher(Fetcher::from(fetcher), config)
        }
        None => EvolutionService::from_config(config)?,
    };

    let graph = service.get_evolution_chain_from_str(&cli.chain_id).await?;
    let rendered = ChainOutput::new(&graph).to_json(cli.pretty)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "chain written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn load_fixtures(path: &Path) -> Result<MemoryFetcher, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    let fixtures: serde_json::Value = serde_json::from_str(&text)?;
    Ok(MemoryFetcher::from_json(fixtures)?)
}
