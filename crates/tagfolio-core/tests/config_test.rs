use tagfolio_core::config::EngineConfig;
use tagfolio_core::errors::{ConfigError, TagfolioError};
use tagfolio_core::Region;

#[test]
fn defaults_validate() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.conflicts.max_hunts_per_year, 2);
    assert_eq!(config.projection.max_projection_years, 50);
    assert_eq!(config.fiduciary.days_per_hunt, 6);
}

#[test]
fn empty_toml_yields_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config.advisor.max_savings_insights, 2);
}

#[test]
fn partial_toml_overrides_only_named_keys() {
    let toml = r#"
        [conflicts]
        max_hunts_per_year = 3

        [purge]
        overrides = [{ region = "CO", max_inactive_years = 4 }]
    "#;
    let config = EngineConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.conflicts.max_hunts_per_year, 3);
    assert_eq!(config.conflicts.days_per_hunt, 7);
    assert_eq!(config.purge.overrides.len(), 1);
    assert_eq!(config.purge.overrides[0].region, Region::Colorado);
}

#[test]
fn weights_must_sum_to_one() {
    let toml = r#"
        [health.weights]
        budget = 0.5
    "#;
    let err = EngineConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(
        err,
        TagfolioError::Config(ConfigError::WeightSum { .. })
    ));
}

#[test]
fn zero_year_purge_override_is_rejected() {
    let toml = r#"
        [purge]
        overrides = [{ region = "WY", max_inactive_years = 0 }]
    "#;
    assert!(EngineConfig::from_toml_str(toml).is_err());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = EngineConfig::from_toml_str("[conflicts\nmax = ").unwrap_err();
    assert!(matches!(err, TagfolioError::Config(ConfigError::Parse { .. })));
}
