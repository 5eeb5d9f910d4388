//! # tagfolio-advisor
//!
//! Turns detector findings and savings-goal shortfalls into a short,
//! ranked list of insights. `Immediate` urgency is reserved for deadline,
//! purge, and discipline-class alerts; savings commentary never uses it.

pub mod generator;
pub mod ranking;
pub mod savings;
pub mod sources;

pub use generator::{AdvisorInput, InsightGenerator};
pub use ranking::rank;
pub use savings::{assess_goal, assess_goal_with, months_between, savings_insights};
