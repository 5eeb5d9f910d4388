use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::roadmap::{ActionType, Roadmap};
use crate::catalog::{Region, Species, SpeciesKey};

/// Annual cost of holding a position, as supplied by reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeeEntry {
    pub region: Region,
    pub species: Species,
    pub annual_cost: f64,
}

/// Annual holding cost per `(region, species)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeeSchedule {
    costs: BTreeMap<SpeciesKey, f64>,
}

impl FeeSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[FeeEntry]) -> Self {
        let costs = entries
            .iter()
            .map(|e| (SpeciesKey::new(e.region, e.species), e.annual_cost))
            .collect();
        Self { costs }
    }

    /// Derive holding costs from the most recent point purchase or
    /// application for each key in the roadmap.
    pub fn from_roadmap(roadmap: &Roadmap) -> Self {
        let mut costs = BTreeMap::new();
        for (_, _, action) in roadmap.actions() {
            if matches!(action.action_type, ActionType::BuyPoints | ActionType::Apply) {
                costs.insert(action.key(), action.cost);
            }
        }
        Self { costs }
    }

    pub fn set(&mut self, key: SpeciesKey, annual_cost: f64) {
        self.costs.insert(key, annual_cost);
    }

    /// Merge another schedule over this one; `other` wins on overlap.
    pub fn merged(mut self, other: &FeeSchedule) -> Self {
        for (k, v) in &other.costs {
            self.costs.insert(*k, *v);
        }
        self
    }

    /// Missing keys cost nothing.
    pub fn annual_cost(&self, key: SpeciesKey) -> f64 {
        self.costs.get(&key).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
