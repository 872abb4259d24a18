//! Raw document shapes returned by the remote data service.
//!
//! Only the fields the resolver reads are modelled; everything else in the
//! service's payloads is ignored during deserialization. A missing required
//! field surfaces as a decode failure.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` pointer to another service resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Human-readable resource name (may be empty in hand-built fixtures).
    #[serde(default)]
    pub name: String,
    /// Address of the resource.
    pub url: String,
}

/// Top-level evolution chain document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDocument {
    /// Root of the nested evolution tree.
    pub chain: ChainLink,
}

/// One node of the evolution tree: a species and what it evolves into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    /// The species at this position in the tree.
    pub species: NamedResource,
    /// Species this one evolves into.
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Species document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDocument {
    /// Species name.
    #[serde(default)]
    pub name: String,
    /// Concrete creature forms of this species, in document order.
    pub varieties: Vec<Variety>,
}

/// A concrete creature form belonging to a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variety {
    /// Whether the service marks this as the species' default form.
    #[serde(default)]
    pub is_default: bool,
    /// The creature resource for this form.
    #[serde(rename = "pokemon")]
    pub creature: NamedResource,
}

/// Creature document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDocument {
    /// Service-assigned creature id.
    pub id: u32,
    /// Creature name.
    pub name: String,
    /// Weight in hectograms.
    pub weight: u32,
    /// Height in decimetres.
    pub height: u32,
    /// Per-stat base values.
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

/// One raw stat entry of a creature document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    /// Base value of the stat.
    pub base_stat: u32,
    /// The stat being described (e.g. `special-attack`).
    pub stat: NamedResource,
}
