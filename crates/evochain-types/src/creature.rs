//! Normalized creature records.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::CreatureId;

/// Canonical attributes of one resolved creature.
///
/// Serializes flat: the named statistics sit next to `id`, `name`, `weight`
/// and `height` rather than under a nested key, matching the shape the
/// persistence layer stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    /// Synthetic integer id assigned by the service.
    pub id: CreatureId,
    /// Creature name.
    pub name: String,
    /// Weight in hectograms.
    pub weight: u32,
    /// Height in decimetres.
    pub height: u32,
    /// Named base statistics.
    #[serde(flatten)]
    pub stats: BaseStats,
}

/// Base statistics of a creature, keyed by underscore-style field names.
///
/// The six well-known stats have dedicated fields. Any other stat the service
/// reports is kept in [`BaseStats::extra`] under its normalized name. A name
/// that collides with a [`CreatureRecord`] field is stored as `stat_<name>`,
/// so the flattened record never repeats a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    /// Hit points.
    #[serde(default)]
    pub hp: u32,
    /// Physical attack.
    #[serde(default)]
    pub attack: u32,
    /// Physical defense.
    #[serde(default)]
    pub defense: u32,
    /// Special attack.
    #[serde(default)]
    pub special_attack: u32,
    /// Special defense.
    #[serde(default)]
    pub special_defense: u32,
    /// Speed.
    #[serde(default)]
    pub speed: u32,
    /// Stats without a dedicated field.
    #[serde(flatten)]
    pub extra: BTreeMap<String, u32>,
}

impl BaseStats {
    /// Store `value` under an already-normalized field name.
    ///
    /// A later call with the same name overwrites the earlier value.
    pub fn set(&mut self, field: &str, value: u32) {
        match field {
            "hp" => self.hp = value,
            "attack" => self.attack = value,
            "defense" => self.defense = value,
            "special_attack" => self.special_attack = value,
            "special_defense" => self.special_defense = value,
            "speed" => self.speed = value,
            other => {
                self.extra.insert(extra_key(other).into_owned(), value);
            }
        }
    }

    /// Look up a stat by normalized field name.
    pub fn get(&self, field: &str) -> Option<u32> {
        match field {
            "hp" => Some(self.hp),
            "attack" => Some(self.attack),
            "defense" => Some(self.defense),
            "special_attack" => Some(self.special_attack),
            "special_defense" => Some(self.special_defense),
            "speed" => Some(self.speed),
            other => self.extra.get(&*extra_key(other)).copied(),
        }
    }
}

/// Record fields that share the flattened namespace with the stats.
const RECORD_FIELDS: [&str; 4] = ["id", "name", "weight", "height"];

fn extra_key(field: &str) -> Cow<'_, str> {
    if RECORD_FIELDS.contains(&field) {
        Cow::Owned(format!("stat_{field}"))
    } else {
        Cow::Borrowed(field)
    }
}
