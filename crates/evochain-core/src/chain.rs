//! Evolution chain traversal.
//!
//! Walks the nested chain document with an explicit work list instead of
//! recursion, so arbitrarily deep chains cannot exhaust the call stack. The
//! walk records every species it visits and one directed edge per
//! "evolves into" entry.
//!
//! A well-formed chain is a tree in which each species appears once. Any
//! repeated species (including a species listed as its own evolution) or a
//! nesting deeper than the configured limit is reported as
//! [`ChainError::MalformedChain`]; no repair is attempted.

use evochain_types::{ChainDocument, ChainId, ChainLink, SpeciesGraph, SpeciesRef};
use tracing::debug;

use crate::endpoints::Endpoints;
use crate::error::ChainError;
use crate::fetch::Fetcher;

/// Fetch the chain document for `chain_id` and walk it into a species graph.
///
/// # Errors
///
/// Returns any fetch/decode error for the chain document, or
/// [`ChainError::MalformedChain`] if the tree is not well formed.
pub async fn traverse_chain(
    fetcher: &Fetcher,
    endpoints: &Endpoints,
    chain_id: ChainId,
    max_depth: usize,
) -> Result<SpeciesGraph, ChainError> {
    let url = endpoints.chain_address(chain_id);
    let document: ChainDocument = fetcher.fetch_as(&url).await?;

    let graph = walk_chain(&document.chain, max_depth)?;
    debug!(
        chain_id = %chain_id,
        species = graph.nodes.len(),
        evolutions = graph.edges.len(),
        "evolution chain traversed"
    );
    Ok(graph)
}

/// Walk an evolution tree rooted at `root`.
///
/// The root sits at depth 0; a child of a node at depth `d` sits at `d + 1`.
/// Edge order follows the LIFO work list and carries no meaning.
///
/// # Errors
///
/// Returns [`ChainError::MalformedChain`] when a species is reached twice or
/// a node lies deeper than `max_depth`.
pub fn walk_chain(root: &ChainLink, max_depth: usize) -> Result<SpeciesGraph, ChainError> {
    let mut graph = SpeciesGraph::default();

    // Each entry: the species, the entries it evolves into, and its depth.
    let mut stack: Vec<(SpeciesRef, &[ChainLink], usize)> =
        vec![(SpeciesRef::from(&root.species), root.evolves_to.as_slice(), 0)];

    while let Some((species, evolutions, depth)) = stack.pop() {
        if !graph.nodes.insert(species.clone()) {
            return Err(ChainError::MalformedChain(format!(
                "species {species} appears more than once"
            )));
        }

        if evolutions.is_empty() {
            continue;
        }

        let child_depth = depth.saturating_add(1);
        if child_depth > max_depth {
            return Err(ChainError::MalformedChain(format!(
                "chain nests deeper than {max_depth} below {species}"
            )));
        }

        for evolution in evolutions {
            let evolved = SpeciesRef::from(&evolution.species);
            graph.edges.push((species.clone(), evolved.clone()));
            stack.push((evolved, evolution.evolves_to.as_slice(), child_depth));
        }
    }

    Ok(graph)
}
