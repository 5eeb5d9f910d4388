//! Total orders shared by every sort site.
//!
//! Declaration order is the sort order: the most pressing variant sorts first.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Conflict and alert severity. `Critical < Warning < Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        })
    }
}

/// Insight urgency. `Immediate < Soon < Informational < Positive`.
///
/// `Immediate` is reserved for deadline and discipline alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Immediate,
    Soon,
    Informational,
    Positive,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Urgency::Immediate => "immediate",
            Urgency::Soon => "soon",
            Urgency::Informational => "informational",
            Urgency::Positive => "positive",
        })
    }
}
