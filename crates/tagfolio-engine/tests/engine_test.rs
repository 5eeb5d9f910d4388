use tagfolio_core::models::{ConflictType, DisasterKind, InsightCategory, Urgency};
use tagfolio_core::{AllocationSystem, EngineConfig, Region, Species, TagfolioError};
use tagfolio_engine::tracing_setup::{self, spans::names};
use tagfolio_engine::{DrawOddsQuery, PortfolioEngine, PortfolioSnapshot};
use test_fixtures::builders::*;
use test_fixtures::{all_scenarios, load_fixture, try_load_fixture};

fn overcommitted() -> PortfolioSnapshot {
    load_fixture("scenarios/overcommitted.json")
}

fn balanced() -> PortfolioSnapshot {
    load_fixture("scenarios/balanced.json")
}

// ── Scenario files ──────────────────────────────────────────────────────

#[test]
fn every_scenario_parses_and_validates() {
    let scenarios: Vec<(String, PortfolioSnapshot)> = all_scenarios().unwrap();
    let names: Vec<&str> = scenarios.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["balanced", "overcommitted"]);
    for (name, snapshot) in &scenarios {
        assert!(snapshot.validate().is_ok(), "{name} failed validation");
    }
    assert!(try_load_fixture::<PortfolioSnapshot>("scenarios/missing.json").is_err());
}

// ── Overcommitted scenario ──────────────────────────────────────────────

#[test]
fn overcommitted_conflicts() {
    let report = PortfolioEngine::default().analyze(&overcommitted()).unwrap();
    let count = |t: ConflictType| report.conflicts.iter().filter(|c| c.conflict_type == t).count();

    assert_eq!(count(ConflictType::Overdraw), 1);
    assert_eq!(count(ConflictType::TimeOffConflict), 1);
    assert_eq!(count(ConflictType::BudgetOverflow), 0);
    assert_eq!(count(ConflictType::ScheduleOverlap), 3);
    assert_eq!(count(ConflictType::PointAbandon), 2);
}

#[test]
fn overcommitted_purges_use_explicit_and_derived_fees() {
    let report = PortfolioEngine::default().analyze(&overcommitted()).unwrap();
    let purges: Vec<(Region, Species, i32, f64)> = report
        .purge_alerts
        .iter()
        .map(|p| (p.region, p.species, p.year_of_purge, p.sunk_value))
        .collect();
    assert_eq!(
        purges,
        vec![
            (Region::Wyoming, Species::Elk, 2027, 208.0),
            (Region::Nevada, Species::MuleDeer, 2025, 426.0),
        ]
    );
}

#[test]
fn overcommitted_deadlines_and_disasters() {
    let report = PortfolioEngine::default().analyze(&overcommitted()).unwrap();

    assert_eq!(report.missed_deadlines.len(), 1);
    assert_eq!(report.missed_deadlines[0].milestone_id, "co-elk-2025-apply");
    assert_eq!(report.missed_deadlines[0].days_overdue, 14);

    assert_eq!(report.upcoming_deadlines.len(), 1);
    assert_eq!(report.upcoming_deadlines[0].days_remaining, 9);

    assert_eq!(report.success_disasters.len(), 1);
    let disaster = &report.success_disasters[0];
    assert_eq!(disaster.kind, DisasterKind::Budget);
    assert_eq!(disaster.year, 2026);
    assert!((disaster.overage - 400.0).abs() < 1e-9);
}

#[test]
fn overcommitted_insights_rank_immediate_first() {
    let report = PortfolioEngine::default().analyze(&overcommitted()).unwrap();
    let urgencies: Vec<Urgency> = report.insights.iter().map(|i| i.urgency).collect();

    assert_eq!(report.insights.len(), 8);
    assert_eq!(&urgencies[..5], &[Urgency::Immediate; 5]);
    assert_eq!(&urgencies[5..], &[Urgency::Soon; 3]);
    assert!(report.insights.iter().any(|i| i.id == "savings-sheep-fund"));
    assert!(report.needs_attention());
    assert_eq!(report.critical_count(), 4);
}

#[test]
fn overcommitted_health_reflects_discipline() {
    let report = PortfolioEngine::default().analyze(&overcommitted()).unwrap();
    assert_eq!(report.health.discipline, 0.0);
    assert!(report.health.composite < 80.0);
    assert!(report
        .insights
        .iter()
        .all(|i| i.category != InsightCategory::PortfolioHealth));
}

#[test]
fn capital_counts_unitemized_costs_as_sunk() {
    let report = PortfolioEngine::default().analyze(&overcommitted()).unwrap();
    assert!((report.capital.total_sunk - 3567.0).abs() < 1e-9);
    assert_eq!(report.capital.total_floated, 0.0);
    assert_eq!(report.burn_rate.len(), 3);
}

// ── Balanced scenario ───────────────────────────────────────────────────

#[test]
fn balanced_portfolio_is_quiet_and_praised() {
    let report = PortfolioEngine::default().analyze(&balanced()).unwrap();

    assert!(report.conflicts.is_empty());
    assert!(report.purge_alerts.is_empty());
    assert!(report.success_disasters.is_empty());
    assert!((report.health.composite - 98.4).abs() < 1e-9);

    assert_eq!(report.insights.len(), 1);
    assert_eq!(report.insights[0].urgency, Urgency::Positive);
    assert!(!report.needs_attention());
}

#[test]
fn balanced_tag_deposit_is_floated() {
    let report = PortfolioEngine::default().analyze(&balanced()).unwrap();
    assert!((report.capital.total_floated - 700.0).abs() < 1e-9);
    assert!((report.capital.total_sunk - 1500.0).abs() < 1e-9);
}

// ── Determinism ─────────────────────────────────────────────────────────

#[test]
fn repeated_runs_are_identical() {
    let engine = PortfolioEngine::default();
    let snapshot = overcommitted();
    let first = engine.analyze(&snapshot).unwrap();
    for _ in 0..5 {
        assert_eq!(engine.analyze(&snapshot).unwrap(), first);
    }
}

#[test]
fn report_serializes_with_snake_case_names() {
    let report = PortfolioEngine::default().analyze(&overcommitted()).unwrap();
    let json = report.to_json().unwrap();
    assert!(json.contains("\"time_off_conflict\""));
    assert!(json.contains("\"purge_alerts\""));
    assert!(json.contains("\"region\": \"WY\""));
}

// ── Validation & config ─────────────────────────────────────────────────

#[test]
fn invalid_snapshot_is_rejected() {
    let mut snapshot = balanced();
    snapshot.ledger.push(ledger_entry(Region::Colorado, Species::Elk, 1));
    let err = PortfolioEngine::default().analyze(&snapshot).unwrap_err();
    assert!(matches!(err, TagfolioError::Validation(_)));
}

#[test]
fn non_contiguous_roadmap_fails_to_parse() {
    let json = r#"{
        "as_of": "2025-01-01",
        "mandate": { "annual_budget_ceiling": 1000.0, "time_horizon_years": 3 },
        "roadmap": [
            { "year": 2025, "phase": "build", "estimated_cost": 0.0 },
            { "year": 2027, "phase": "build", "estimated_cost": 0.0 }
        ]
    }"#;
    assert!(PortfolioSnapshot::from_json(json).is_err());
}

#[test]
fn purge_overrides_flow_from_toml() {
    let engine = PortfolioEngine::from_toml_str(
        r#"
        [purge]
        replace_defaults = true
        overrides = [{ region = "NV", max_inactive_years = 4 }]
        "#,
    )
    .unwrap();
    let report = engine.analyze(&overcommitted()).unwrap();
    assert!(report.purge_alerts.is_empty());
}

#[test]
fn conflict_limits_flow_from_config() {
    let mut config = EngineConfig::default();
    config.conflicts.max_hunts_per_year = 3;
    let report = PortfolioEngine::new(config).unwrap().analyze(&overcommitted()).unwrap();
    assert!(report
        .conflicts
        .iter()
        .all(|c| c.conflict_type != ConflictType::Overdraw));
}

#[test]
fn bad_weights_are_rejected() {
    let mut config = EngineConfig::default();
    config.health.weights.budget = 0.5;
    assert!(PortfolioEngine::new(config).is_err());
}

// ── Odds passthrough ────────────────────────────────────────────────────

#[test]
fn engine_exposes_odds() {
    let engine = PortfolioEngine::default();
    let rate = engine.estimate_creep_rate(5.0).unwrap();
    assert!((rate - 0.06).abs() < 1e-9);

    let odds = engine
        .draw_odds(&DrawOddsQuery {
            system: AllocationSystem::RandomLottery,
            current_points: 0,
            required_points: 0.0,
            creep_rate: 0.0,
            tags: 10,
            applicants: 100,
            horizon_years: 2,
        })
        .unwrap();
    assert!((odds.current_odds - 0.1).abs() < 1e-9);
    assert_eq!(odds.years_to_likely_draw, None);

    let projection = engine.project_draw(10, 5.0, 0.05);
    assert_eq!(projection.years, 0);
}

// ── Hand-built snapshot ─────────────────────────────────────────────────

#[test]
fn empty_plan_has_no_findings() {
    let snapshot = PortfolioSnapshot {
        roadmap: roadmap(empty_years(2025, 3)),
        ledger: vec![],
        mandate: mandate(1000.0, 3),
        milestones: vec![],
        savings_goals: vec![],
        draw_histories: vec![],
        fees: vec![],
        as_of: date(2025, 1, 1),
    };
    let report = PortfolioEngine::default().analyze(&snapshot).unwrap();
    assert!(report.conflicts.is_empty());
    assert!(report.purge_alerts.is_empty());
    assert_eq!(report.health.horizon, 50.0);
    assert_eq!(report.critical_count(), 0);
    // No hunt: frequency 76, horizon 50, composite 85.2.
    assert_eq!(report.insights.len(), 1);
    assert_eq!(report.insights[0].urgency, Urgency::Positive);
}

// ── Tracing ─────────────────────────────────────────────────────────────

#[test]
fn tracing_init_is_idempotent() {
    tracing_setup::init(false);
    tracing_setup::init(true);
    let report = PortfolioEngine::default().analyze(&balanced()).unwrap();
    assert_eq!(report.insights.len(), 1);
    assert!(names::CONFLICTS.starts_with("tagfolio."));
}
