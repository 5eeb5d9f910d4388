/// Tagfolio engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on any year-by-year projection loop.
pub const MAX_PROJECTION_YEARS: u32 = 50;

/// Estimated field days consumed by one hunt when checking roadmap time-off.
pub const ROADMAP_DAYS_PER_HUNT: u32 = 7;

/// Estimated days away per drawn tag when checking milestone time-off.
pub const MILESTONE_DAYS_PER_HUNT: u32 = 6;

/// Draw odds below this are considered a long shot for exposure scoring.
pub const LONG_SHOT_ODDS: f64 = 0.05;

/// Point-creep velocity at or above which a position is a dead asset.
pub const DEAD_ASSET_VELOCITY: f64 = 1.0;
