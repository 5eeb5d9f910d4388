use tagfolio_core::models::{FeeSchedule, PurgeRule, RoadmapYear, Severity};
use tagfolio_core::{Region, Species, SpeciesKey};
use tagfolio_purge::{detect_purges, PurgeDetector, PurgeRuleTable};
use test_fixtures::builders::*;

/// Years 2025.. where `active[i]` says whether the key has an action that year.
fn activity(region: Region, species: Species, active: &[bool]) -> Vec<RoadmapYear> {
    active
        .iter()
        .enumerate()
        .map(|(i, &on)| {
            let actions = if on {
                vec![buy_points(region, species, 50.0)]
            } else {
                vec![]
            };
            year(2025 + i as i32, actions)
        })
        .collect()
}

fn fees(region: Region, species: Species, cost: f64) -> FeeSchedule {
    let mut f = FeeSchedule::new();
    f.set(SpeciesKey::new(region, species), cost);
    f
}

// ── Rule limits ─────────────────────────────────────────────────────────

#[test]
fn two_year_rule_alerts_at_second_skipped_year() {
    let rm = roadmap(activity(Region::Wyoming, Species::Elk, &[true, false, false, true]));
    let ledger = vec![ledger_entry(Region::Wyoming, Species::Elk, 5)];
    let alerts = detect_purges(
        &rm,
        &ledger,
        &PurgeRuleTable::default(),
        &fees(Region::Wyoming, Species::Elk, 52.0),
    );
    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.year_of_purge, 2027);
    assert_eq!(alert.severity, Severity::Critical);
    assert_eq!(alert.current_points, 5);
    assert!((alert.sunk_value - 260.0).abs() < 1e-9);
    assert!(alert.message.contains("permanent deletion"));
}

#[test]
fn one_year_rule_alerts_at_first_skipped_year() {
    let rm = roadmap(activity(Region::Nevada, Species::MuleDeer, &[true, false, true]));
    let ledger = vec![ledger_entry(Region::Nevada, Species::MuleDeer, 3)];
    let alerts = detect_purges(&rm, &ledger, &PurgeRuleTable::default(), &FeeSchedule::new());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].year_of_purge, 2026);
}

#[test]
fn active_every_year_never_alerts() {
    let rm = roadmap(activity(Region::Nevada, Species::Elk, &[true; 10]));
    let ledger = vec![ledger_entry(Region::Nevada, Species::Elk, 8)];
    assert!(detect_purges(&rm, &ledger, &PurgeRuleTable::default(), &FeeSchedule::new()).is_empty());
}

#[test]
fn long_gap_alerts_once() {
    let rm = roadmap(activity(Region::Utah, Species::Elk, &[false; 6]));
    let ledger = vec![ledger_entry(Region::Utah, Species::Elk, 4)];
    let alerts = detect_purges(&rm, &ledger, &PurgeRuleTable::default(), &FeeSchedule::new());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].year_of_purge, 2026);
}

#[test]
fn rearms_after_activity() {
    let rm = roadmap(activity(
        Region::Utah,
        Species::Elk,
        &[false, false, true, false, false],
    ));
    let ledger = vec![ledger_entry(Region::Utah, Species::Elk, 4)];
    let years: Vec<i32> = detect_purges(&rm, &ledger, &PurgeRuleTable::default(), &FeeSchedule::new())
        .iter()
        .map(|a| a.year_of_purge)
        .collect();
    assert_eq!(years, vec![2026, 2029]);
}

// ── Missing data ────────────────────────────────────────────────────────

#[test]
fn region_without_rule_never_alerts() {
    let rm = roadmap(empty_years(2025, 20));
    let ledger = vec![ledger_entry(Region::NewMexico, Species::Elk, 9)];
    assert!(detect_purges(&rm, &ledger, &PurgeRuleTable::default(), &FeeSchedule::new()).is_empty());
}

#[test]
fn zero_point_keys_are_not_tracked() {
    let rm = roadmap(empty_years(2025, 5));
    let ledger = vec![ledger_entry(Region::Nevada, Species::Elk, 0)];
    assert!(detect_purges(&rm, &ledger, &PurgeRuleTable::default(), &FeeSchedule::new()).is_empty());
}

#[test]
fn missing_fee_gives_zero_sunk_value() {
    let rm = roadmap(empty_years(2025, 2));
    let ledger = vec![ledger_entry(Region::Montana, Species::Elk, 6)];
    let alerts = detect_purges(&rm, &ledger, &PurgeRuleTable::default(), &FeeSchedule::new());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].sunk_value, 0.0);
}

#[test]
fn activity_for_other_species_does_not_reset() {
    let rm = roadmap(vec![
        year(2025, vec![buy_points(Region::Wyoming, Species::Pronghorn, 30.0)]),
        year(2026, vec![buy_points(Region::Wyoming, Species::Pronghorn, 30.0)]),
    ]);
    let ledger = vec![ledger_entry(Region::Wyoming, Species::Elk, 2)];
    let alerts = detect_purges(&rm, &ledger, &PurgeRuleTable::default(), &FeeSchedule::new());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].year_of_purge, 2026);
}

// ── Detector with overrides ─────────────────────────────────────────────

#[test]
fn detector_uses_override_table() {
    let rm = roadmap(empty_years(2025, 3));
    let ledger = vec![ledger_entry(Region::Idaho, Species::Moose, 1)];
    let detector = PurgeDetector::new(PurgeRuleTable::from_rules(&[PurgeRule {
        region: Region::Idaho,
        max_inactive_years: 3,
    }]));
    let alerts = detector.detect(&rm, &ledger, &FeeSchedule::from_roadmap(&rm));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].year_of_purge, 2027);
}

#[test]
fn fee_schedule_from_roadmap_prices_sunk_value() {
    let rm = roadmap(vec![
        year(2025, vec![buy_points(Region::Montana, Species::Elk, 20.0)]),
        year(2026, vec![buy_points(Region::Montana, Species::Elk, 25.0)]),
        year(2027, vec![]),
    ]);
    let ledger = vec![ledger_entry(Region::Montana, Species::Elk, 4)];
    let alerts = PurgeDetector::default().detect(&rm, &ledger, &FeeSchedule::from_roadmap(&rm));
    assert_eq!(alerts.len(), 1);
    assert!((alerts[0].sunk_value - 100.0).abs() < 1e-9);
}

// ── Properties ──────────────────────────────────────────────────────────

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn alert_count_matches_gap_runs(active in prop::collection::vec(any::<bool>(), 1..25)) {
            let rm = roadmap(activity(Region::Wyoming, Species::Elk, &active));
            let ledger = vec![ledger_entry(Region::Wyoming, Species::Elk, 3)];
            let alerts = detect_purges(&rm, &ledger, &PurgeRuleTable::default(), &FeeSchedule::new());

            let mut expected = 0;
            let mut run = 0;
            for &on in &active {
                run = if on { 0 } else { run + 1 };
                if run == 2 {
                    expected += 1;
                }
            }
            prop_assert_eq!(alerts.len(), expected);
            prop_assert!(alerts.iter().all(|a| a.severity == Severity::Critical));
        }
    }
}
