//! # tagfolio-purge
//!
//! Some regions delete accumulated points after a run of years with no
//! application activity. This crate walks the roadmap per ledger key and
//! flags the year a purge would land.

pub mod detector;
pub mod rules;

pub use detector::{detect_purges, PurgeDetector};
pub use rules::PurgeRuleTable;
