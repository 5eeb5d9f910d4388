//! # tagfolio-conflicts
//!
//! Roadmap conflict detection.
//!
//! ## Detectors
//! 1. **Overdraw**: more hunts in a year than the hunter can take
//! 2. **Time off**: estimated hunt days exceed available time off
//! 3. **Budget overflow**: year cost exceeds the applicable budget
//! 4. **Schedule overlap**: two hunts in different regions may collide
//! 5. **Point abandonment**: points held with no hunt anywhere in the plan
//!
//! Detectors are independent. Their outputs are concatenated, never
//! deduplicated against each other.

pub mod detectors;
pub mod report;
pub mod resolver;

pub use detectors::DetectionContext;
pub use report::ConflictReport;
pub use resolver::ConflictResolver;
