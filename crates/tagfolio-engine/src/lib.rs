//! # tagfolio-engine
//!
//! Facade over the Tagfolio analysis crates. Build a [`PortfolioSnapshot`],
//! hand it to [`PortfolioEngine::analyze`], and get back a
//! [`PortfolioReport`] with every component's output.
//!
//! Independent components run concurrently on the rayon pool; the health
//! scorer and advisor run afterwards over their joined results.

pub mod engine;
pub mod report;
pub mod snapshot;
pub mod tracing_setup;

pub use engine::PortfolioEngine;
pub use report::PortfolioReport;
pub use snapshot::PortfolioSnapshot;
pub use tagfolio_odds::DrawOddsQuery;
