//! The five health factors. Each returns a raw score; clamping happens in
//! [`compose`](crate::formula::compose).

pub mod budget;
pub mod discipline;
pub mod exposure;
pub mod frequency;
pub mod horizon;

use tagfolio_core::models::{Mandate, PlanConflict, PurgeAlert, Roadmap, SuccessDisasterAlert};

/// Everything the scorer reads for one portfolio.
#[derive(Debug, Clone, Copy)]
pub struct HealthInput<'a> {
    pub roadmap: &'a Roadmap,
    pub mandate: &'a Mandate,
    pub conflicts: &'a [PlanConflict],
    pub purges: &'a [PurgeAlert],
    pub disasters: &'a [SuccessDisasterAlert],
    pub as_of_year: i32,
}
