//! Fixture documents shaped like the data service's responses.

#![allow(dead_code)]

use serde_json::{Value, json};

/// Species link entry rooted at `base`.
pub fn link(base: &str, species: &str, evolves_to: Vec<Value>) -> Value {
    json!({
        "species": { "name": species, "url": species_url(base, species) },
        "evolves_to": evolves_to
    })
}

pub fn species_url(base: &str, species: &str) -> String {
    format!("{base}/pokemon-species/{species}/")
}

pub fn creature_url(base: &str, id: u32) -> String {
    format!("{base}/pokemon/{id}/")
}

pub fn chain_url(base: &str, id: u32) -> String {
    format!("{base}/evolution-chain/{id}/")
}

pub fn species_doc(base: &str, name: &str, varieties: &[(bool, u32)]) -> Value {
    let varieties: Vec<Value> = varieties
        .iter()
        .map(|(is_default, id)| {
            json!({
                "is_default": is_default,
                "pokemon": { "name": name, "url": creature_url(base, *id) }
            })
        })
        .collect();
    json!({ "name": name, "varieties": varieties })
}

pub fn creature_doc(id: u32, name: &str, special_attack: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "weight": id * 10,
        "height": id,
        "stats": [
            { "base_stat": 50, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 55, "stat": { "name": "attack", "url": "" } },
            { "base_stat": 40, "stat": { "name": "defense", "url": "" } },
            { "base_stat": special_attack, "stat": { "name": "special-attack", "url": "" } },
            { "base_stat": 50, "stat": { "name": "special-defense", "url": "" } },
            { "base_stat": 90, "stat": { "name": "speed", "url": "" } }
        ]
    })
}

/// Every document needed to resolve the four-species branching chain
/// A -> {B, C}, C -> D, with creature ids 1..=4, keyed by address.
pub fn branching_chain_fixtures(base: &str, chain_id: u32) -> Vec<(String, Value)> {
    let chain = json!({
        "id": chain_id,
        "chain": link(base, "a", vec![
            link(base, "b", vec![]),
            link(base, "c", vec![link(base, "d", vec![])]),
        ])
    });

    let mut docs = vec![(chain_url(base, chain_id), chain)];
    for (id, name) in [(1, "a"), (2, "b"), (3, "c"), (4, "d")] {
        docs.push((species_url(base, name), species_doc(base, name, &[(true, id)])));
        docs.push((creature_url(base, id), creature_doc(id, name, 100 + id)));
    }
    docs
}
