//! Error types for evolution chain resolution.
//!
//! Uses `thiserror` for typed errors that surface through the whole pipeline:
//! fetching, decoding, species resolution, chain traversal and graph
//! assembly. Nothing is recovered locally; every failure aborts the request
//! that triggered it.

use evochain_types::InvalidChainId;

/// Errors that can occur while resolving an evolution chain.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Transport {
        /// Address that was requested.
        url: String,
        /// HTTP status code of the response.
        status: u16,
    },

    /// The request never produced a response (connection failure, timeout,
    /// truncated body).
    #[error("request to {url} failed: {message}")]
    Request {
        /// Address that was requested.
        url: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// The response body was not valid JSON, or lacked a required field.
    #[error("failed to decode document from {url}: {source}")]
    Decode {
        /// Address the document came from.
        url: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A species document listed no creature varieties.
    #[error("species {species} has no varieties")]
    EmptyVarieties {
        /// Name (or reference) of the offending species.
        species: String,
    },

    /// The chain identifier was not a non-negative integer.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidChainId),

    /// The chain document is not a tree (repeated species) or exceeds the
    /// configured depth.
    #[error("malformed evolution chain: {0}")]
    MalformedChain(String),

    /// Resolved data disagrees with the traversed species graph.
    #[error("internal consistency error: {0}")]
    Inconsistent(String),

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),
}

/// Field-free discriminant of a [`ChainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ChainError::Transport`].
    Transport,
    /// See [`ChainError::Request`].
    Request,
    /// See [`ChainError::Decode`].
    Decode,
    /// See [`ChainError::EmptyVarieties`].
    EmptyVarieties,
    /// See [`ChainError::InvalidIdentifier`].
    InvalidIdentifier,
    /// See [`ChainError::MalformedChain`].
    MalformedChain,
    /// See [`ChainError::Inconsistent`].
    Inconsistent,
    /// See [`ChainError::Config`].
    Config,
}

impl ChainError {
    /// The kind of this error, for matching without destructuring.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Request { .. } => ErrorKind::Request,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::EmptyVarieties { .. } => ErrorKind::EmptyVarieties,
            Self::InvalidIdentifier(_) => ErrorKind::InvalidIdentifier,
            Self::MalformedChain(_) => ErrorKind::MalformedChain,
            Self::Inconsistent(_) => ErrorKind::Inconsistent,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}
