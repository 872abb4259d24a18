//! Shared type definitions for evolution chain resolution.
//!
//! This crate holds the data model used across the workspace: identifiers,
//! the raw service document shapes, normalized creature records, and the
//! species-level and creature-level graphs.
//!
//! # Modules
//!
//! - [`ids`] -- Integer and string identifier wrappers
//! - [`documents`] -- Raw chain, species and creature documents
//! - [`creature`] -- Normalized creature records and base stats
//! - [`graph`] -- Species graph (intermediate) and creature graph (output)

pub mod creature;
pub mod documents;
pub mod graph;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use creature::{BaseStats, CreatureRecord};
pub use documents::{
    ChainDocument, ChainLink, CreatureDocument, NamedResource, SpeciesDocument, StatEntry, Variety,
};
pub use graph::{CreatureGraph, EvolutionLink, SpeciesGraph};
pub use ids::{ChainId, CreatureId, InvalidChainId, SpeciesRef};
