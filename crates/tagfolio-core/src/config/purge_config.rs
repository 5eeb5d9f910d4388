use serde::{Deserialize, Serialize};

use crate::models::PurgeRule;

/// Per-region overrides merged over the static purge-rule table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PurgeConfig {
    pub overrides: Vec<PurgeRule>,
    /// Ignore the static table and use only the overrides.
    pub replace_defaults: bool,
}
