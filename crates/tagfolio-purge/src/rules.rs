//! Per-region purge rules.

use std::collections::BTreeMap;

use tagfolio_core::config::PurgeConfig;
use tagfolio_core::models::PurgeRule;
use tagfolio_core::Region;

/// Regions known to delete points after `n` consecutive inactive years.
/// Regions not listed here keep points indefinitely.
const DEFAULT_RULES: &[(Region, u32)] = &[
    (Region::Wyoming, 2),
    (Region::Utah, 2),
    (Region::Oregon, 2),
    (Region::Washington, 2),
    (Region::Nevada, 1),
    (Region::Montana, 1),
    (Region::Arizona, 5),
    (Region::Colorado, 10),
];

/// Lookup table from region to its inactivity limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeRuleTable {
    rules: BTreeMap<Region, u32>,
}

impl Default for PurgeRuleTable {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.iter().copied().collect(),
        }
    }
}

impl PurgeRuleTable {
    /// A table with no rules; nothing ever purges.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    pub fn from_rules(rules: &[PurgeRule]) -> Self {
        Self::empty().with_overrides(rules)
    }

    /// Static table with configured overrides applied on top.
    pub fn from_config(config: &PurgeConfig) -> Self {
        let base = if config.replace_defaults {
            Self::empty()
        } else {
            Self::default()
        };
        base.with_overrides(&config.overrides)
    }

    pub fn with_overrides(mut self, overrides: &[PurgeRule]) -> Self {
        for rule in overrides {
            self.rules.insert(rule.region, rule.max_inactive_years);
        }
        self
    }

    pub fn max_inactive_years(&self, region: Region) -> Option<u32> {
        self.rules.get(&region).copied()
    }

    pub fn rules(&self) -> Vec<PurgeRule> {
        self.rules
            .iter()
            .map(|(&region, &max_inactive_years)| PurgeRule {
                region,
                max_inactive_years,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_known_limits() {
        let table = PurgeRuleTable::default();
        assert_eq!(table.max_inactive_years(Region::Wyoming), Some(2));
        assert_eq!(table.max_inactive_years(Region::Nevada), Some(1));
        assert_eq!(table.max_inactive_years(Region::NewMexico), None);
    }

    #[test]
    fn overrides_replace_or_extend() {
        let config = PurgeConfig {
            overrides: vec![
                PurgeRule { region: Region::Wyoming, max_inactive_years: 3 },
                PurgeRule { region: Region::Idaho, max_inactive_years: 4 },
            ],
            replace_defaults: false,
        };
        let table = PurgeRuleTable::from_config(&config);
        assert_eq!(table.max_inactive_years(Region::Wyoming), Some(3));
        assert_eq!(table.max_inactive_years(Region::Idaho), Some(4));
        assert_eq!(table.max_inactive_years(Region::Utah), Some(2));
    }

    #[test]
    fn replace_defaults_drops_static_rules() {
        let config = PurgeConfig {
            overrides: vec![PurgeRule { region: Region::Idaho, max_inactive_years: 4 }],
            replace_defaults: true,
        };
        let table = PurgeRuleTable::from_config(&config);
        assert_eq!(table.len(), 1);
        assert_eq!(table.max_inactive_years(Region::Wyoming), None);
    }
}
