//! Savings goal projection and the insights it may produce.

use chrono::{Datelike, NaiveDate};
use tagfolio_core::config::defaults::DEFAULT_RED_SHORTFALL_RATIO;
use tagfolio_core::models::{
    AdvisorInsight, GoalAssessment, GoalStatus, InsightCategory, SavingsGoal, Urgency,
};

/// Whole months from `from` to `to`, 0 when `to` is not after `from`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0) as u32
}

pub fn assess_goal(goal: &SavingsGoal, as_of: NaiveDate) -> GoalAssessment {
    assess_goal_with(goal, as_of, DEFAULT_RED_SHORTFALL_RATIO)
}

/// Project the balance at the target date and classify the shortfall.
///
/// Red when the shortfall is at least `red_ratio` of the target, amber for
/// any smaller shortfall, on track otherwise.
pub fn assess_goal_with(goal: &SavingsGoal, as_of: NaiveDate, red_ratio: f64) -> GoalAssessment {
    let months_remaining = months_between(as_of, goal.target_date);
    let projected_amount =
        goal.current_amount + goal.monthly_contribution.max(0.0) * f64::from(months_remaining);
    let shortfall = (goal.target_amount - projected_amount).max(0.0);

    let ratio = if goal.target_amount > 0.0 {
        shortfall / goal.target_amount
    } else {
        0.0
    };
    let status = if shortfall <= 0.0 {
        GoalStatus::OnTrack
    } else if ratio >= red_ratio {
        GoalStatus::Red
    } else {
        GoalStatus::Amber
    };

    GoalAssessment {
        goal_id: goal.id.clone(),
        label: goal.label.clone(),
        status,
        projected_amount,
        shortfall,
        months_remaining,
    }
}

/// Insights for goals below target: red before amber, at most `limit`.
///
/// On-track goals produce nothing.
pub fn savings_insights(
    goals: &[SavingsGoal],
    as_of: NaiveDate,
    red_ratio: f64,
    limit: usize,
) -> Vec<AdvisorInsight> {
    let mut behind: Vec<GoalAssessment> = goals
        .iter()
        .map(|g| assess_goal_with(g, as_of, red_ratio))
        .filter(|a| a.status != GoalStatus::OnTrack)
        .collect();
    behind.sort_by_key(|a| a.status);

    behind.iter().take(limit).map(to_insight).collect()
}

fn to_insight(a: &GoalAssessment) -> AdvisorInsight {
    let (urgency, interpretation) = match a.status {
        GoalStatus::Red => (
            Urgency::Soon,
            format!(
                "'{}' is on pace to fall ${:.0} short, a significant gap.",
                a.label, a.shortfall
            ),
        ),
        _ => (
            Urgency::Informational,
            format!("'{}' is on pace to fall ${:.0} short.", a.label, a.shortfall),
        ),
    };
    let per_month = if a.months_remaining > 0 {
        a.shortfall / f64::from(a.months_remaining)
    } else {
        a.shortfall
    };

    AdvisorInsight {
        id: format!("savings-{}", a.goal_id),
        category: InsightCategory::Savings,
        urgency,
        interpretation,
        recommendation: format!(
            "Add about ${per_month:.0} per month or push the target date back."
        ),
        call_to_action: "Adjust savings plan".to_string(),
        portfolio_context: Some(format!("Projected balance ${:.0}", a.projected_amount)),
        temporal_context: Some(format!("{} month(s) remaining", a.months_remaining)),
    }
}
