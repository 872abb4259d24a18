//! JSON rendering of a resolved chain.
//!
//! The output mirrors what the persistence layer stores: one entry per
//! creature, and one `{from, to}` pair per evolution.

use evochain_types::{CreatureGraph, CreatureRecord, EvolutionLink};
use serde::Serialize;
use tracing::info;

/// Serializable view of a [`CreatureGraph`].
#[derive(Debug, Serialize)]
pub struct ChainOutput<'a> {
    /// Creature records in ascending id order.
    pub creatures: Vec<&'a CreatureRecord>,
    /// Evolution links, sorted.
    pub evolutions: Vec<EvolutionLink>,
}

impl<'a> ChainOutput<'a> {
    /// Build the output view, logging each creature and link as it is added.
    pub fn new(graph: &'a CreatureGraph) -> Self {
        let creatures: Vec<&CreatureRecord> = graph.nodes.values().collect();
        for creature in &creatures {
            info!(id = %creature.id, name = creature.name, "saving creature");
        }

        let mut evolutions = graph.edges.clone();
        evolutions.sort_unstable();
        for link in &evolutions {
            info!(from = %link.from, to = %link.to, "saving link");
        }

        Self {
            creatures,
            evolutions,
        }
    }

    /// Render as JSON text.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
