//! Graph assembly: resolving species and re-keying edges by creature id.
//!
//! Species resolutions are independent of one another, so they run through a
//! bounded pool of in-flight futures. The graph is only assembled once every
//! resolution has succeeded; the first failure drops all outstanding work and
//! is returned to the caller.

use std::collections::BTreeMap;

use evochain_types::{CreatureGraph, CreatureId, CreatureRecord, EvolutionLink, SpeciesGraph, SpeciesRef};
use futures::{StreamExt, TryStreamExt, stream};

use crate::error::ChainError;
use crate::species::SpeciesResolver;

/// Resolve every species in `species_graph` and build the creature graph.
///
/// At most `concurrency` resolutions are in flight at once (a value of 0 is
/// treated as 1).
///
/// # Errors
///
/// Returns the first resolution error, or [`ChainError::Inconsistent`] if an
/// edge names an unresolved species or two species resolve to the same
/// creature id.
pub async fn build_creature_graph(
    resolver: &SpeciesResolver<'_>,
    species_graph: &SpeciesGraph,
    concurrency: usize,
) -> Result<CreatureGraph, ChainError> {
    let resolved: BTreeMap<&SpeciesRef, CreatureRecord> = stream::iter(&species_graph.nodes)
        .map(|species| async move {
            resolver
                .resolve_creature(species)
                .await
                .map(|record| (species, record))
        })
        .buffer_unordered(concurrency.max(1))
        .try_collect()
        .await?;

    let edges = species_graph
        .edges
        .iter()
        .map(|(from, to)| {
            Ok(EvolutionLink {
                from: creature_id(&resolved, from)?,
                to: creature_id(&resolved, to)?,
            })
        })
        .collect::<Result<Vec<_>, ChainError>>()?;

    let mut nodes = BTreeMap::new();
    for (species, record) in resolved {
        let id = record.id;
        if nodes.insert(id, record).is_some() {
            return Err(ChainError::Inconsistent(format!(
                "creature {id} resolved for more than one species (last: {species})"
            )));
        }
    }

    Ok(CreatureGraph { nodes, edges })
}

fn creature_id(
    resolved: &BTreeMap<&SpeciesRef, CreatureRecord>,
    species: &SpeciesRef,
) -> Result<CreatureId, ChainError> {
    resolved
        .get(species)
        .map(|record| record.id)
        .ok_or_else(|| ChainError::Inconsistent(format!("no creature resolved for {species}")))
}
