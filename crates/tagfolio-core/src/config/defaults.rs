// Projection
pub const DEFAULT_BASE_CREEP_RATE: f64 = 0.02;
pub const DEFAULT_CREEP_PER_SIGNAL: f64 = 0.008;
pub const DEFAULT_LIKELY_DRAW_ODDS: f64 = 0.5;

// Conflicts
pub const DEFAULT_MAX_HUNTS_PER_YEAR: u32 = 2;
pub const DEFAULT_BUDGET_WARNING_RATIO: f64 = 1.2;
pub const DEFAULT_BUDGET_CRITICAL_RATIO: f64 = 1.5;
pub const DEFAULT_ABANDON_INFO_POINTS: u32 = 3;
pub const DEFAULT_ABANDON_WARNING_POINTS: u32 = 5;

// Fiduciary
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 30;

// Health
pub const DEFAULT_WEIGHT_BUDGET: f64 = 0.25;
pub const DEFAULT_WEIGHT_FREQUENCY: f64 = 0.20;
pub const DEFAULT_WEIGHT_EXPOSURE: f64 = 0.20;
pub const DEFAULT_WEIGHT_HORIZON: f64 = 0.20;
pub const DEFAULT_WEIGHT_DISCIPLINE: f64 = 0.15;
pub const DEFAULT_FREQUENCY_PENALTY_PER_YEAR: f64 = 8.0;
pub const DEFAULT_IDEAL_AGE_MIN: i32 = 16;
pub const DEFAULT_IDEAL_AGE_MAX: i32 = 60;
pub const DEFAULT_DEMANDING_AGE_MIN: i32 = 20;
pub const DEFAULT_DEMANDING_AGE_MAX: i32 = 50;
pub const DEFAULT_HORIZON_PENALTY_PER_YEAR: f64 = 10.0;
pub const DEFAULT_HORIZON_PENALTY_CAP: f64 = 50.0;
pub const DEFAULT_HORIZON_UNKNOWN_AGE: f64 = 75.0;
pub const DEFAULT_HORIZON_NO_HUNT: f64 = 50.0;
pub const DEFAULT_CEILING_PENALTY_CAP: f64 = 50.0;
pub const DEFAULT_DISCIPLINE_CRITICAL_PENALTY: f64 = 25.0;
pub const DEFAULT_DISCIPLINE_WARNING_PENALTY: f64 = 15.0;
pub const DEFAULT_DISCIPLINE_INFO_PENALTY: f64 = 5.0;

// Advisor
pub const DEFAULT_MAX_INSIGHTS: usize = 8;
pub const DEFAULT_MAX_SAVINGS_INSIGHTS: usize = 2;
pub const DEFAULT_RED_SHORTFALL_RATIO: f64 = 0.25;
pub const DEFAULT_POSITIVE_HEALTH_THRESHOLD: f64 = 80.0;
