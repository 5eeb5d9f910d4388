//! Span definitions per component: analyze, conflicts, purge, fiduciary,
//! capital, health, advisor.

/// Create the span covering a whole `analyze` run.
#[macro_export]
macro_rules! analyze_span {
    ($as_of:expr, $years:expr) => {
        tracing::info_span!("tagfolio.analyze", as_of = %$as_of, years = $years)
    };
}

#[macro_export]
macro_rules! conflicts_span {
    ($years:expr) => {
        tracing::info_span!("tagfolio.conflicts", years = $years)
    };
}

#[macro_export]
macro_rules! purge_span {
    ($tracked:expr) => {
        tracing::info_span!("tagfolio.purge", tracked = $tracked)
    };
}

#[macro_export]
macro_rules! fiduciary_span {
    ($milestones:expr) => {
        tracing::info_span!("tagfolio.fiduciary", milestones = $milestones)
    };
}

#[macro_export]
macro_rules! capital_span {
    ($positions:expr) => {
        tracing::info_span!("tagfolio.capital", positions = $positions)
    };
}

#[macro_export]
macro_rules! health_span {
    () => {
        tracing::info_span!("tagfolio.health")
    };
}

#[macro_export]
macro_rules! advisor_span {
    ($goals:expr) => {
        tracing::info_span!("tagfolio.advisor", savings_goals = $goals)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYZE: &str = "tagfolio.analyze";
    pub const CONFLICTS: &str = "tagfolio.conflicts";
    pub const PURGE: &str = "tagfolio.purge";
    pub const FIDUCIARY: &str = "tagfolio.fiduciary";
    pub const CAPITAL: &str = "tagfolio.capital";
    pub const HEALTH: &str = "tagfolio.health";
    pub const ADVISOR: &str = "tagfolio.advisor";
}
