//! Remote document fetching.
//!
//! Defines an enum-based dispatch over document sources, avoiding the
//! dyn-compatibility issues with async trait methods. [`HttpFetcher`] talks to
//! the real data service over HTTP via `reqwest`; [`MemoryFetcher`] serves
//! canned documents from memory for tests and offline fixtures.
//!
//! Every call is a single attempt: no retries, no caching. Retry policy
//! belongs to whoever wraps the service.
//!
//! Bodies are decoded without serde_json's nesting limit, growing the stack
//! on demand through `serde_stacker`. Chain depth is policed by the chain
//! walker instead.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::CoreConfig;
use crate::error::ChainError;

// ---------------------------------------------------------------------------
// Unified fetcher enum (dyn-compatible alternative to async trait)
// ---------------------------------------------------------------------------

/// A source of structured documents addressed by URL.
pub enum Fetcher {
    /// Live HTTP data service.
    Http(HttpFetcher),
    /// In-memory canned documents.
    Memory(MemoryFetcher),
}

impl Fetcher {
    /// Retrieve the document at `url` as untyped JSON.
    ///
    /// # Errors
    ///
    /// - [`ChainError::Transport`] for a non-success status
    /// - [`ChainError::Request`] when no response was received
    /// - [`ChainError::Decode`] when the body is not JSON
    pub async fn fetch(&self, url: &str) -> Result<Value, ChainError> {
        match self {
            Self::Http(fetcher) => fetcher.fetch(url).await,
            Self::Memory(fetcher) => fetcher.fetch(url),
        }
    }

    /// Retrieve the document at `url` and decode it into `T`.
    ///
    /// A document missing a field `T` requires is a [`ChainError::Decode`].
    pub async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> Result<T, ChainError> {
        let value = self.fetch(url).await?;
        T::deserialize(serde_stacker::Deserializer::new(value)).map_err(|source| {
            ChainError::Decode {
                url: url.to_owned(),
                source,
            }
        })
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Memory(_) => "memory",
        }
    }

    /// The in-memory fetcher, if this is one.
    pub const fn as_memory(&self) -> Option<&MemoryFetcher> {
        match self {
            Self::Memory(fetcher) => Some(fetcher),
            Self::Http(_) => None,
        }
    }
}

impl From<HttpFetcher> for Fetcher {
    fn from(fetcher: HttpFetcher) -> Self {
        Self::Http(fetcher)
    }
}

impl From<MemoryFetcher> for Fetcher {
    fn from(fetcher: MemoryFetcher) -> Self {
        Self::Memory(fetcher)
    }
}

/// Parse a response body as JSON with no nesting limit.
fn parse_body(url: &str, body: &[u8]) -> Result<Value, ChainError> {
    let decode = |source| ChainError::Decode {
        url: url.to_owned(),
        source,
    };

    let mut deserializer = serde_json::Deserializer::from_slice(body);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(decode)?;
    deserializer.end().map_err(decode)?;
    Ok(value)
}

// ---------------------------------------------------------------------------
// HTTP fetcher
// ---------------------------------------------------------------------------

/// Fetcher that issues HTTP GET requests.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher honouring the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &CoreConfig) -> Result<Self, ChainError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ChainError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    async fn fetch(&self, url: &str) -> Result<Value, ChainError> {
        debug!(url, "fetching document");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ChainError::Request {
                url: url.to_owned(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChainError::Transport {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| ChainError::Request {
            url: url.to_owned(),
            message: format!("failed to read body: {e}"),
        })?;

        parse_body(url, &body)
    }
}

// ---------------------------------------------------------------------------
// In-memory fetcher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Canned {
    Json(Value),
    Raw(String),
    Status(u16),
}

/// Fetcher that serves documents registered ahead of time.
///
/// Unknown addresses answer like a missing resource (HTTP 404). Every call is
/// counted, so tests can assert how many fetches an operation made.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    documents: BTreeMap<String, Canned>,
    requests: AtomicUsize,
}

impl MemoryFetcher {
    /// Create an empty fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fetcher from a JSON object mapping addresses to documents.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Config`] if `fixtures` is not a JSON object.
    pub fn from_json(fixtures: Value) -> Result<Self, ChainError> {
        let Value::Object(entries) = fixtures else {
            return Err(ChainError::Config(
                "fixtures must be a JSON object keyed by address".to_owned(),
            ));
        };
        let documents = entries
            .into_iter()
            .map(|(url, document)| (url, Canned::Json(document)))
            .collect();
        Ok(Self {
            documents,
            requests: AtomicUsize::new(0),
        })
    }

    /// Register a JSON document at `url`.
    pub fn insert(&mut self, url: impl Into<String>, document: Value) {
        self.documents.insert(url.into(), Canned::Json(document));
    }

    /// Register a raw body at `url`, decoded only when fetched.
    pub fn insert_raw(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.documents.insert(url.into(), Canned::Raw(body.into()));
    }

    /// Make `url` answer with the given HTTP status.
    pub fn insert_status(&mut self, url: impl Into<String>, status: u16) {
        self.documents.insert(url.into(), Canned::Status(status));
    }

    /// Builder-style [`MemoryFetcher::insert`].
    #[must_use]
    pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
        self.insert(url, document);
        self
    }

    /// Number of fetches served so far, including failed ones.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    fn fetch(&self, url: &str) -> Result<Value, ChainError> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        debug!(url, "serving canned document");

        match self.documents.get(url) {
            Some(Canned::Json(document)) => Ok(document.clone()),
            Some(Canned::Raw(body)) => parse_body(url, body.as_bytes()),
            Some(Canned::Status(status)) => Err(ChainError::Transport {
                url: url.to_owned(),
                status: *status,
            }),
            None => Err(ChainError::Transport {
                url: url.to_owned(),
                status: 404,
            }),
        }
    }
}
