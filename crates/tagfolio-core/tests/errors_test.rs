use tagfolio_core::errors::*;

#[test]
fn unknown_region_carries_code() {
    let err = ValidationError::UnknownRegion { code: "ZZ".into() };
    assert!(err.to_string().contains("ZZ"));
}

#[test]
fn non_contiguous_years_carries_both_years() {
    let err = ValidationError::NonContiguousYears {
        previous: 2025,
        year: 2027,
    };
    let msg = err.to_string();
    assert!(msg.contains("2025"));
    assert!(msg.contains("2027"));
}

#[test]
fn weight_sum_carries_sum() {
    let err = ConfigError::WeightSum { sum: 1.25 };
    assert!(err.to_string().contains("1.25"));
}

// --- From impls ---

#[test]
fn validation_error_converts_to_tagfolio_error() {
    let err: TagfolioError = ValidationError::UnknownSpecies {
        name: "unicorn".into(),
    }
    .into();
    assert!(matches!(err, TagfolioError::Validation(_)));
    assert!(err.to_string().contains("unicorn"));
}

#[test]
fn config_error_converts_to_tagfolio_error() {
    let err: TagfolioError = ConfigError::Parse {
        reason: "bad toml".into(),
    }
    .into();
    assert!(matches!(err, TagfolioError::Config(_)));
}
