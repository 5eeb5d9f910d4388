//! # tagfolio-odds
//!
//! Two leaf components consumed by every downstream analysis:
//!
//! 1. **Point creep**: maps a competitiveness signal to an annual
//!    requirement-inflation rate and projects years until a point holder
//!    catches the requirement.
//! 2. **Draw odds**: current-year and cumulative probability of drawing,
//!    branching on the allocation system.

pub mod creep;
pub mod draw;
pub mod engine;

pub use creep::{creep_rate_from_velocity, estimate_creep_rate, project_draw, years_to_draw};
pub use draw::DrawOddsQuery;
pub use engine::OddsEngine;
