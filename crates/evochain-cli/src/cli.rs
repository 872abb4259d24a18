//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Fetch an evolution chain and print its creatures and evolutions as JSON.
#[derive(Debug, Parser)]
#[command(name = "evochain")]
#[command(version)]
pub struct Cli {
    /// Evolution chain id (a non-negative integer)
    pub chain_id: String,

    /// Write the JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,

    /// Serve documents from a JSON file mapping addresses to documents
    /// instead of the network
    #[arg(long, env = "EVOCHAIN_FIXTURES")]
    pub fixtures: Option<PathBuf>,
}
