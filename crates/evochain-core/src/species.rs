//! Species resolution: picking a canonical creature and normalizing it.
//!
//! A species may have several creature varieties. The canonical one is the
//! variety flagged default; when no variety carries the flag, the first
//! listed variety is used. Resolution costs two fetches: the species
//! document, then the selected creature document.

use evochain_types::{
    BaseStats, CreatureDocument, CreatureId, CreatureRecord, SpeciesDocument, SpeciesRef, Variety,
};
use tracing::{debug, warn};

use crate::endpoints::Endpoints;
use crate::error::ChainError;
use crate::fetch::Fetcher;

/// Resolves species references to canonical creature records.
pub struct SpeciesResolver<'a> {
    fetcher: &'a Fetcher,
    endpoints: &'a Endpoints,
}

impl<'a> SpeciesResolver<'a> {
    /// Create a resolver over the given fetcher and address mapping.
    pub const fn new(fetcher: &'a Fetcher, endpoints: &'a Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// Fetch `species`, select its canonical variety and return the
    /// normalized creature record.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptyVarieties`] when the species lists no
    /// varieties, or any fetch/decode error from either request.
    pub async fn resolve_creature(&self, species: &SpeciesRef) -> Result<CreatureRecord, ChainError> {
        let species_url = self.endpoints.species_address(species);
        let document: SpeciesDocument = self.fetcher.fetch_as(&species_url).await?;

        let variety = select_variety(&document, species)?;
        let creature_url = self.endpoints.creature_address(&variety.creature);
        let creature: CreatureDocument = self.fetcher.fetch_as(&creature_url).await?;

        let record = normalize_creature(creature);
        debug!(
            species = %species,
            creature_id = %record.id,
            creature = record.name,
            "species resolved"
        );
        Ok(record)
    }
}

/// Select the canonical variety of a species.
///
/// Scanning left to right, the last variety flagged default wins. With no
/// flagged variety the first one is returned.
///
/// # Errors
///
/// Returns [`ChainError::EmptyVarieties`] if `document` lists no varieties.
pub fn select_variety<'d>(
    document: &'d SpeciesDocument,
    species: &SpeciesRef,
) -> Result<&'d Variety, ChainError> {
    let Some(first) = document.varieties.first() else {
        let name = if document.name.is_empty() {
            species.to_string()
        } else {
            document.name.clone()
        };
        return Err(ChainError::EmptyVarieties { species: name });
    };

    let defaults = document.varieties.iter().filter(|v| v.is_default).count();
    if defaults > 1 {
        warn!(
            species = %species,
            defaults,
            "species flags several default varieties, using the last one"
        );
    }

    Ok(document
        .varieties
        .iter()
        .rfind(|v| v.is_default)
        .unwrap_or(first))
}

/// Normalize a raw creature document into a [`CreatureRecord`].
///
/// Identity, name, weight and height are copied verbatim. Each stat entry is
/// stored under its name with hyphens replaced by underscores.
pub fn normalize_creature(document: CreatureDocument) -> CreatureRecord {
    let mut stats = BaseStats::default();
    for entry in &document.stats {
        stats.set(&stat_field_name(&entry.stat.name), entry.base_stat);
    }

    CreatureRecord {
        id: CreatureId(document.id),
        name: document.name,
        weight: document.weight,
        height: document.height,
        stats,
    }
}

/// Record field name for a service stat name (`special-attack` -> `special_attack`).
pub fn stat_field_name(stat: &str) -> String {
    stat.replace('-', "_")
}
