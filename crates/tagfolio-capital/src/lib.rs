//! # tagfolio-capital
//!
//! Where the money went and what it is buying.
//!
//! - [`allocation`] splits every action's cost into sunk (non-refundable)
//!   and floated (refunded on an unsuccessful draw) capital.
//! - [`burn_rate`] builds one row per held position with point-creep
//!   velocity, trend, ETA, and dead-asset detection.

pub mod allocation;
pub mod burn_rate;

pub use allocation::{classify_action, compute_capital_summary, CapitalSplit};
pub use burn_rate::{compute_burn_rate_matrix, creep_velocity, creep_trend};
