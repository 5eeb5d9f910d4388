//! # tagfolio-fiduciary
//!
//! Watches the user's milestones for two kinds of trouble: application
//! deadlines that slipped (or are about to), and draw results that stack up
//! beyond what the budget and time off can carry.

pub mod deadlines;
pub mod disaster;
pub mod dispatcher;

pub use deadlines::{detect_missed_deadlines, detect_upcoming_deadlines};
pub use disaster::detect_success_disaster;
pub use dispatcher::FiduciaryDispatcher;
