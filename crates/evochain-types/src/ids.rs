//! Type-safe identifier wrappers.
//!
//! Chains and creatures are both keyed by integers in the remote service, so
//! each gets its own newtype to prevent accidental mixing at compile time.
//! Species are keyed by an opaque string reference instead.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::documents::NamedResource;

/// Generates a newtype wrapper around an unsigned integer with standard derives.
macro_rules! define_int_id {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty)
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Wrap a raw integer identifier.
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Return the inner integer value.
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_int_id! {
    /// Identifier of one evolution chain in the remote service.
    ChainId(u64)
}

define_int_id! {
    /// Synthetic integer identifier of a resolved creature.
    CreatureId(u32)
}

/// A chain identifier could not be represented as a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected non-negative integer evolution chain id, found {found:?}")]
pub struct InvalidChainId {
    /// The rejected input, rendered as text.
    pub found: String,
}

impl TryFrom<i64> for ChainId {
    type Error = InvalidChainId;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .map(Self)
            .ok_or_else(|| InvalidChainId {
                found: value.to_string(),
            })
    }
}

impl FromStr for ChainId {
    type Err = InvalidChainId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // `u64::from_str` accepts a leading `+`, which is not an integer literal
        // as far as callers are concerned.
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidChainId {
                found: s.to_owned(),
            });
        }
        trimmed
            .parse::<u64>()
            .ok()
            .map(Self)
            .ok_or_else(|| InvalidChainId {
                found: s.to_owned(),
            })
    }
}

/// Opaque, stable identity of a species.
///
/// In practice this holds the URL the service used to name the species, but
/// it is only ever compared by exact string match. Turning a reference into a
/// fetch address is the job of the endpoint mapping in `evochain-core`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesRef(String);

impl SpeciesRef {
    /// Wrap a raw species reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Borrow the raw reference text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&NamedResource> for SpeciesRef {
    fn from(resource: &NamedResource) -> Self {
        Self(resource.url.clone())
    }
}

impl core::fmt::Display for SpeciesRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
