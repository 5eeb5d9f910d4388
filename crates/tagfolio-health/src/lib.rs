//! # tagfolio-health
//!
//! Portfolio health as five 0–100 sub-scores and a weighted composite:
//!
//! ```text
//! composite = 0.25 × budget
//!           + 0.20 × frequency
//!           + 0.20 × exposure
//!           + 0.20 × horizon
//!           + 0.15 × discipline
//! ```
//!
//! Weights come from [`HealthConfig`](tagfolio_core::config::HealthConfig).

pub mod factors;
pub mod formula;
pub mod scorer;

pub use factors::HealthInput;
pub use formula::{compose, SubScores};
pub use scorer::HealthScorer;
