use tagfolio_core::models::{DisasterKind, DrawOutcome, Milestone, MilestoneType, Severity};
use tagfolio_fiduciary::{
    detect_missed_deadlines, detect_success_disaster, detect_upcoming_deadlines,
    FiduciaryDispatcher,
};
use test_fixtures::builders::*;

fn apply_due(id: &str, y: i32, m: u32, d: u32) -> Milestone {
    milestone(id, MilestoneType::Apply, y, Some(date(y, m, d)), 50.0)
}

// ── Missed deadlines ────────────────────────────────────────────────────

#[test]
fn overdue_incomplete_apply_is_missed() {
    let milestones = vec![apply_due("co-elk", 2026, 4, 7)];
    let missed = detect_missed_deadlines(&milestones, date(2026, 4, 10));
    assert_eq!(missed.len(), 1);
    assert_eq!(missed[0].milestone_id, "co-elk");
    assert_eq!(missed[0].due_date, date(2026, 4, 7));
    assert_eq!(missed[0].days_overdue, 3);
}

#[test]
fn deadline_on_as_of_date_is_not_missed() {
    let milestones = vec![apply_due("a", 2026, 4, 7)];
    assert!(detect_missed_deadlines(&milestones, date(2026, 4, 7)).is_empty());
}

#[test]
fn completed_other_types_and_undated_are_ignored() {
    let mut done = apply_due("done", 2026, 1, 1);
    done.completed = true;
    let hunt = milestone("hunt", MilestoneType::Hunt, 2026, Some(date(2026, 1, 1)), 900.0);
    let deadline = milestone("dl", MilestoneType::Deadline, 2026, Some(date(2026, 1, 1)), 0.0);
    let undated = milestone("undated", MilestoneType::Apply, 2026, None, 50.0);

    let missed = detect_missed_deadlines(&[done, hunt, deadline, undated], date(2026, 6, 1));
    assert!(missed.is_empty());
}

// ── Upcoming deadlines ──────────────────────────────────────────────────

#[test]
fn upcoming_window_is_inclusive_and_sorted() {
    let milestones = vec![
        apply_due("late", 2026, 5, 1),
        apply_due("today", 2026, 4, 1),
        apply_due("past", 2026, 3, 31),
        apply_due("edge", 2026, 5, 1),
        apply_due("beyond", 2026, 5, 2),
    ];
    let upcoming = detect_upcoming_deadlines(&milestones, date(2026, 4, 1), 30);
    let ids: Vec<&str> = upcoming.iter().map(|d| d.milestone_id.as_str()).collect();
    assert_eq!(ids, vec!["today", "late", "edge"]);
    assert_eq!(upcoming[0].days_remaining, 0);
    assert_eq!(upcoming[1].days_remaining, 30);
}

// ── Success disaster ────────────────────────────────────────────────────

#[test]
fn drawn_costs_over_budget_raise_critical_with_overage() {
    let milestones = vec![
        drawn(milestone("a", MilestoneType::Hunt, 2026, None, 3000.0), DrawOutcome::Drew),
        drawn(milestone("b", MilestoneType::Hunt, 2026, None, 2500.0), DrawOutcome::Drew),
    ];
    let alerts = detect_success_disaster(&milestones, 5000.0, 30, 2026, 6);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, DisasterKind::Budget);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert!((alerts[0].overage - 500.0).abs() < 1e-9);
    assert!(alerts[0].description.contains("$500.00"));
    assert_eq!(alerts[0].milestone_ids, vec!["a", "b"]);
}

#[test]
fn undrawn_and_unknown_outcomes_are_excluded() {
    let milestones = vec![
        drawn(milestone("a", MilestoneType::Hunt, 2026, None, 3000.0), DrawOutcome::Drew),
        drawn(milestone("b", MilestoneType::Hunt, 2026, None, 9000.0), DrawOutcome::DidntDraw),
        milestone("c", MilestoneType::Hunt, 2026, None, 9000.0),
    ];
    assert!(detect_success_disaster(&milestones, 5000.0, 30, 2026, 6).is_empty());
}

#[test]
fn single_draw_can_exceed_time_off() {
    let milestones = vec![drawn(
        milestone("a", MilestoneType::Hunt, 2026, None, 100.0),
        DrawOutcome::Drew,
    )];
    let alerts = detect_success_disaster(&milestones, 5000.0, 5, 2026, 6);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, DisasterKind::TimeOff);
    assert_eq!(alerts[0].severity, Severity::Warning);
    assert_eq!(alerts[0].overage, 1.0);
}

#[test]
fn both_checks_fire_independently() {
    let milestones: Vec<Milestone> = (0..3)
        .map(|i| {
            drawn(
                milestone(&format!("m{i}"), MilestoneType::Hunt, 2027, None, 2000.0),
                DrawOutcome::Drew,
            )
        })
        .collect();
    let alerts = detect_success_disaster(&milestones, 5000.0, 14, 2027, 6);
    let kinds: Vec<DisasterKind> = alerts.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![DisasterKind::Budget, DisasterKind::TimeOff]);
}

#[test]
fn other_years_do_not_count() {
    let milestones = vec![drawn(
        milestone("a", MilestoneType::Hunt, 2025, None, 9000.0),
        DrawOutcome::Drew,
    )];
    assert!(detect_success_disaster(&milestones, 5000.0, 14, 2026, 6).is_empty());
}

// ── Dispatcher ──────────────────────────────────────────────────────────

#[test]
fn dispatcher_uses_mandate_budgets_across_years() {
    let mut m = mandate(4000.0, 5);
    m.hunt_year_budget = Some(2000.0);
    m.pto_days_available = Some(20);
    let milestones = vec![
        drawn(milestone("a", MilestoneType::Hunt, 2026, None, 2500.0), DrawOutcome::Drew),
        drawn(milestone("b", MilestoneType::Hunt, 2030, None, 1000.0), DrawOutcome::Drew),
    ];
    let alerts = FiduciaryDispatcher::default().success_disasters(&milestones, &m, 2025..2028);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].year, 2026);
    assert_eq!(alerts[0].id, "success_disaster-budget-2026");
}

// ── Properties ──────────────────────────────────────────────────────────

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_overdue_open_apply_is_reported(
            specs in prop::collection::vec((1u32..=28, any::<bool>(), any::<bool>()), 0..20),
        ) {
            let as_of = date(2026, 2, 14);
            let milestones: Vec<Milestone> = specs
                .iter()
                .enumerate()
                .map(|(i, &(day, completed, is_apply))| {
                    let kind = if is_apply { MilestoneType::Apply } else { MilestoneType::Hunt };
                    let mut m = milestone(&format!("m{i}"), kind, 2026, Some(date(2026, 2, day)), 10.0);
                    m.completed = completed;
                    m
                })
                .collect();

            let missed = detect_missed_deadlines(&milestones, as_of);
            let expected: Vec<String> = milestones
                .iter()
                .filter(|m| m.milestone_type == MilestoneType::Apply && !m.completed)
                .filter(|m| m.due_date.is_some_and(|d| d < as_of))
                .map(|m| m.id.clone())
                .collect();
            let got: Vec<String> = missed.iter().map(|d| d.milestone_id.clone()).collect();
            prop_assert_eq!(got, expected);
            prop_assert!(missed.iter().all(|d| d.days_overdue > 0));
        }
    }
}
