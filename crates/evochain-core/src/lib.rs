//! Evolution chain resolution.
//!
//! Fetches an evolution chain from the remote data service, resolves every
//! species in it to its canonical creature, and flattens the result into a
//! [`CreatureGraph`] keyed by creature id.
//!
//! # Architecture
//!
//! ```text
//! ChainId --> Chain Traverser --> SpeciesGraph --> Graph Assembler --> CreatureGraph
//!                  |                                     |
//!                  +---------- Remote Fetcher <-- Species Resolver
//! ```
//!
//! Either the complete graph is returned or an error is; there is no partial
//! result.

pub mod assemble;
pub mod chain;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod fetch;
pub mod species;

#[cfg(test)]
mod testing;

use std::time::Instant;

use evochain_types::{ChainId, CreatureGraph};
use tracing::info;

pub use crate::config::CoreConfig;
pub use crate::endpoints::Endpoints;
pub use crate::error::{ChainError, ErrorKind};
pub use crate::fetch::{Fetcher, HttpFetcher, MemoryFetcher};
pub use crate::species::SpeciesResolver;

/// Entry point tying the fetcher, address mapping and limits together.
pub struct EvolutionService {
    fetcher: Fetcher,
    endpoints: Endpoints,
    config: CoreConfig,
}

impl EvolutionService {
    /// Build a service that talks to the configured data service over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Config`] if the configuration is invalid or the
    /// HTTP client cannot be created.
    pub fn from_config(config: CoreConfig) -> Result<Self, ChainError> {
        config.validate()?;
        let fetcher = Fetcher::Http(HttpFetcher::new(&config)?);
        Ok(Self::with_fetcher(fetcher, config))
    }

    /// Build a service over an arbitrary fetcher.
    pub fn with_fetcher(fetcher: Fetcher, config: CoreConfig) -> Self {
        Self {
            endpoints: Endpoints::new(&config.api_url),
            fetcher,
            config,
        }
    }

    /// The fetcher this service reads through.
    pub const fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Resolve chain `chain_id` into a graph of canonical creatures.
    ///
    /// # Errors
    ///
    /// Returns the first error hit by any fetch, decode, species resolution
    /// or consistency check.
    pub async fn get_evolution_chain(&self, chain_id: ChainId) -> Result<CreatureGraph, ChainError> {
        let started = Instant::now();

        let species_graph = chain::traverse_chain(
            &self.fetcher,
            &self.endpoints,
            chain_id,
            self.config.max_chain_depth,
        )
        .await?;

        let resolver = SpeciesResolver::new(&self.fetcher, &self.endpoints);
        let graph = assemble::build_creature_graph(
            &resolver,
            &species_graph,
            self.config.max_concurrent_fetches,
        )
        .await?;

        info!(
            chain_id = %chain_id,
            fetcher = self.fetcher.name(),
            creatures = graph.nodes.len(),
            evolutions = graph.edges.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "evolution chain resolved"
        );
        Ok(graph)
    }

    /// Parse `input` as a chain id, then resolve it.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidIdentifier`] without any fetch if `input`
    /// is not a non-negative integer; otherwise as
    /// [`EvolutionService::get_evolution_chain`].
    pub async fn get_evolution_chain_from_str(&self, input: &str) -> Result<CreatureGraph, ChainError> {
        let chain_id: ChainId = input.parse()?;
        self.get_evolution_chain(chain_id).await
    }
}
