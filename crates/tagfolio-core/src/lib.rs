//! # tagfolio-core
//!
//! Foundation crate for the Tagfolio portfolio engine.
//! Defines the data model, the closed region/species catalog, the shared
//! severity and urgency orders, errors, config, and boundary validation.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod validation;

// Re-export the most commonly used types at the crate root.
pub use catalog::{AllocationSystem, Region, Species, SpeciesKey};
pub use config::EngineConfig;
pub use errors::{TagfolioError, TagfolioResult};
pub use models::{
    ActionType, Mandate, Milestone, PlanConflict, PointsLedgerEntry, Roadmap, RoadmapAction,
    RoadmapYear, Severity, Urgency,
};
