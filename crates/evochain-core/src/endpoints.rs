//! Mapping from identities to fetch addresses.
//!
//! Species references are opaque identities. This module is the single place
//! that turns a chain id, species reference or creature resource into the
//! address the fetcher should request.

use evochain_types::{ChainId, NamedResource, SpeciesRef};

/// Address templates for one data service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Build endpoints rooted at `base_url`. A trailing slash is ignored.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Address of the evolution chain document for `chain_id`.
    pub fn chain_address(&self, chain_id: ChainId) -> String {
        format!("{}/evolution-chain/{chain_id}/", self.base_url)
    }

    /// Address of the species document for `species`.
    ///
    /// Absolute references are requested as-is; bare references (a name or
    /// numeric id) are resolved under `pokemon-species/`.
    pub fn species_address(&self, species: &SpeciesRef) -> String {
        self.resolve(species.as_str(), "pokemon-species")
    }

    /// Address of the creature document a variety points at.
    pub fn creature_address(&self, creature: &NamedResource) -> String {
        if creature.url.is_empty() {
            return self.resolve(&creature.name, "pokemon");
        }
        self.resolve(&creature.url, "pokemon")
    }

    fn resolve(&self, reference: &str, collection: &str) -> String {
        if is_absolute(reference) {
            reference.to_owned()
        } else {
            format!(
                "{}/{collection}/{}/",
                self.base_url,
                reference.trim_matches('/')
            )
        }
    }
}

fn is_absolute(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}
