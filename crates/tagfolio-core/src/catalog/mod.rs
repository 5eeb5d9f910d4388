//! Closed catalog of jurisdictions, species, and draw systems.
//!
//! Reference data arrives keyed by string codes; parsing into these enums is
//! the only place an unknown code can appear, and it fails with a
//! [`ValidationError`](crate::errors::ValidationError).

mod allocation;
mod region;
mod species;

pub use allocation::AllocationSystem;
pub use region::Region;
pub use species::Species;

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Lookup key for every per-position computation: `(region, species)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpeciesKey {
    pub region: Region,
    pub species: Species,
}

impl SpeciesKey {
    pub fn new(region: Region, species: Species) -> Self {
        Self { region, species }
    }
}

impl fmt::Display for SpeciesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.region, self.species)
    }
}
