//! Fixture builders shared by the unit tests.

use serde_json::{Value, json};

use crate::fetch::MemoryFetcher;

pub const BASE: &str = "http://fixture.test/api/v2";

pub fn species_url(key: &str) -> String {
    format!("{BASE}/pokemon-species/{key}/")
}

pub fn creature_url(id: u32) -> String {
    format!("{BASE}/pokemon/{id}/")
}

pub fn link(species: &str, evolves_to: Vec<Value>) -> Value {
    json!({
        "species": { "name": species, "url": species_url(species) },
        "evolves_to": evolves_to,
        "is_baby": false
    })
}

pub fn chain_doc(id: u32, root: Value) -> Value {
    json!({ "id": id, "baby_trigger_item": null, "chain": root })
}

pub fn species_doc(name: &str, varieties: &[(bool, u32)]) -> Value {
    let varieties: Vec<Value> = varieties
        .iter()
        .map(|(is_default, id)| {
            json!({
                "is_default": is_default,
                "pokemon": { "name": format!("{name}-{id}"), "url": creature_url(*id) }
            })
        })
        .collect();
    json!({ "id": 1, "name": name, "varieties": varieties })
}

pub fn creature_doc(id: u32, name: &str) -> Value {
    let stats: Vec<Value> = [
        ("hp", 45),
        ("attack", 49),
        ("defense", 49),
        ("special-attack", 65),
        ("special-defense", 65),
        ("speed", 45),
    ]
    .into_iter()
    .map(|(stat, base)| {
        json!({ "base_stat": base, "effort": 0, "stat": { "name": stat, "url": "" } })
    })
    .collect();
    json!({
        "id": id,
        "name": name,
        "weight": 69,
        "height": 7,
        "base_experience": 64,
        "stats": stats
    })
}

/// Register a species with a single default variety resolving to `id`.
pub fn register_species(fetcher: &mut MemoryFetcher, species: &str, id: u32) {
    fetcher.insert(species_url(species), species_doc(species, &[(true, id)]));
    fetcher.insert(creature_url(id), creature_doc(id, species));
}
