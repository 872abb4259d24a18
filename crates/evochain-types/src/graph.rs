//! Species-level and creature-level evolution graphs.
//!
//! A [`SpeciesGraph`] is the intermediate result of walking an evolution
//! chain: species identities plus the directed "evolves into" pairs between
//! them. A [`CreatureGraph`] is the finished artifact handed to callers, keyed
//! by each creature's own integer id.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::creature::CreatureRecord;
use crate::ids::{CreatureId, SpeciesRef};

/// Species discovered in a chain and the evolutions between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesGraph {
    /// Every distinct species in the chain.
    pub nodes: BTreeSet<SpeciesRef>,
    /// `(from, to)` pairs meaning `from` evolves into `to`.
    pub edges: Vec<(SpeciesRef, SpeciesRef)>,
}

impl SpeciesGraph {
    /// True when every edge endpoint is also a node.
    pub fn is_consistent(&self) -> bool {
        self.edges
            .iter()
            .all(|(from, to)| self.nodes.contains(from) && self.nodes.contains(to))
    }
}

/// A directed evolution between two creatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EvolutionLink {
    /// The creature that evolves.
    pub from: CreatureId,
    /// The creature it evolves into.
    pub to: CreatureId,
}

/// Finished evolution graph of canonical creatures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureGraph {
    /// Creature records keyed by their id.
    pub nodes: BTreeMap<CreatureId, CreatureRecord>,
    /// Evolution links between ids present in `nodes`.
    pub edges: Vec<EvolutionLink>,
}

impl CreatureGraph {
    /// Look up a creature by name, ignoring surrounding whitespace and case.
    pub fn find_by_name(&self, name: &str) -> Option<&CreatureRecord> {
        let wanted = name.trim().to_lowercase();
        self.nodes
            .values()
            .find(|record| record.name.to_lowercase() == wanted)
    }

    /// The creature `id` evolves from, if any.
    pub fn pre_evolution(&self, id: CreatureId) -> Option<&CreatureRecord> {
        self.edges
            .iter()
            .find(|link| link.to == id)
            .and_then(|link| self.nodes.get(&link.from))
    }

    /// Creatures `id` evolves into, in edge order.
    pub fn evolutions(&self, id: CreatureId) -> Vec<&CreatureRecord> {
        self.edges
            .iter()
            .filter(|link| link.from == id)
            .filter_map(|link| self.nodes.get(&link.to))
            .collect()
    }

    /// Creatures that do not evolve from anything in this graph.
    pub fn roots(&self) -> Vec<&CreatureRecord> {
        let evolved: BTreeSet<CreatureId> = self.edges.iter().map(|link| link.to).collect();
        self.nodes
            .values()
            .filter(|record| !evolved.contains(&record.id))
            .collect()
    }

    /// True when every node is keyed by its own id and every link endpoint
    /// names a node.
    pub fn check_consistency(&self) -> bool {
        self.nodes.iter().all(|(id, record)| *id == record.id)
            && self
                .edges
                .iter()
                .all(|link| self.nodes.contains_key(&link.from) && self.nodes.contains_key(&link.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::BaseStats;

    fn record(id: u32, name: &str) -> CreatureRecord {
        CreatureRecord {
            id: CreatureId(id),
            name: name.to_owned(),
            weight: 10,
            height: 3,
            stats: BaseStats::default(),
        }
    }

    fn eevee_graph() -> CreatureGraph {
        let mut nodes = BTreeMap::new();
        for (id, name) in [(133, "eevee"), (134, "vaporeon"), (135, "jolteon"), (136, "flareon")] {
            nodes.insert(CreatureId(id), record(id, name));
        }
        let edges = [134, 135, 136]
            .into_iter()
            .map(|to| EvolutionLink {
                from: CreatureId(133),
                to: CreatureId(to),
            })
            .collect();
        CreatureGraph { nodes, edges }
    }

    #[test]
    fn find_by_name_normalizes_query() {
        let graph = eevee_graph();
        let found = graph.find_by_name("  Jolteon ").map(|r| r.id);
        assert_eq!(found, Some(CreatureId(135)));
        assert!(graph.find_by_name("pikachu").is_none());
    }

    #[test]
    fn pre_evolution_and_evolutions() {
        let graph = eevee_graph();
        assert_eq!(
            graph.pre_evolution(CreatureId(136)).map(|r| r.name.as_str()),
            Some("eevee")
        );
        assert!(graph.pre_evolution(CreatureId(133)).is_none());
        let names: Vec<&str> = graph
            .evolutions(CreatureId(133))
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["vaporeon", "jolteon", "flareon"]);
    }

    #[test]
    fn roots_are_creatures_without_pre_evolution() {
        let graph = eevee_graph();
        let roots: Vec<CreatureId> = graph.roots().into_iter().map(|r| r.id).collect();
        assert_eq!(roots, [CreatureId(133)]);
    }

    #[test]
    fn dangling_link_is_inconsistent() {
        let mut graph = eevee_graph();
        assert!(graph.check_consistency());
        graph.edges.push(EvolutionLink {
            from: CreatureId(133),
            to: CreatureId(470),
        });
        assert!(!graph.check_consistency());
    }

    #[test]
    fn species_graph_consistency() {
        let a = SpeciesRef::new("a");
        let b = SpeciesRef::new("b");
        let mut graph = SpeciesGraph {
            nodes: [a.clone(), b.clone()].into_iter().collect(),
            edges: vec![(a.clone(), b)],
        };
        assert!(graph.is_consistent());
        graph.edges.push((a, SpeciesRef::new("c")));
        assert!(!graph.is_consistent());
    }
}
