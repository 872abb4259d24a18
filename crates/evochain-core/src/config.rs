//! Configuration for the evolution chain resolver.
//!
//! All configuration is loaded from environment variables, each with a
//! default. The resolver needs to know where the data service lives, how long
//! to wait on a single fetch, how many species to resolve at once, and how
//! deep a chain may nest before it is treated as malformed.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ChainError;

/// Default base URL of the evolution/species/creature data service.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Complete core configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Base URL of the data service (e.g. `https://pokeapi.co/api/v2`).
    pub api_url: String,
    /// Timeout applied to each individual fetch, in milliseconds.
    pub request_timeout_ms: u64,
    /// Maximum number of species resolved concurrently. `1` reproduces a
    /// strictly sequential resolution.
    pub max_concurrent_fetches: usize,
    /// Deepest nesting accepted in a chain document.
    pub max_chain_depth: usize,
    /// `User-Agent` header sent with each request.
    pub user_agent: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            request_timeout_ms: 10_000,
            max_concurrent_fetches: 4,
            max_chain_depth: 64,
            user_agent: concat!("evochain/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl CoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `EVOCHAIN_API_URL` -- data service base URL (default `https://pokeapi.co/api/v2`)
    /// - `EVOCHAIN_REQUEST_TIMEOUT_MS` -- per-fetch timeout (default 10000)
    /// - `EVOCHAIN_MAX_CONCURRENT_FETCHES` -- resolution pool size (default 4)
    /// - `EVOCHAIN_MAX_CHAIN_DEPTH` -- depth guard (default 64)
    /// - `EVOCHAIN_USER_AGENT` -- HTTP `User-Agent` (default `evochain/<version>`)
    pub fn from_env() -> Result<Self, ChainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            api_url: lookup("EVOCHAIN_API_URL").unwrap_or(defaults.api_url),
            request_timeout_ms: parse_var(
                &lookup,
                "EVOCHAIN_REQUEST_TIMEOUT_MS",
                defaults.request_timeout_ms,
            )?,
            max_concurrent_fetches: parse_var(
                &lookup,
                "EVOCHAIN_MAX_CONCURRENT_FETCHES",
                defaults.max_concurrent_fetches,
            )?,
            max_chain_depth: parse_var(
                &lookup,
                "EVOCHAIN_MAX_CHAIN_DEPTH",
                defaults.max_chain_depth,
            )?,
            user_agent: lookup("EVOCHAIN_USER_AGENT").unwrap_or(defaults.user_agent),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the resolver cannot run with.
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.max_concurrent_fetches == 0 {
            return Err(ChainError::Config(
                "max_concurrent_fetches must be at least 1".to_owned(),
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(ChainError::Config("api_url must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Per-fetch timeout as a [`Duration`].
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ChainError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(name).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|e| ChainError::Config(format!("invalid {name}: {e}")))
    })
}
