//! One conversion per detector output.

use tagfolio_core::models::{
    AdvisorInsight, HealthScoreBreakdown, InsightCategory, MissedDeadline, PlanConflict,
    PurgeAlert, Severity, SuccessDisasterAlert, UpcomingDeadline, Urgency,
};

pub fn from_missed_deadline(d: &MissedDeadline) -> AdvisorInsight {
    AdvisorInsight {
        id: format!("deadline-missed-{}", d.milestone_id),
        category: InsightCategory::Deadline,
        urgency: Urgency::Immediate,
        interpretation: format!(
            "The {} {} application deadline passed on {} and it was not submitted.",
            d.region, d.species, d.due_date
        ),
        recommendation: "Check whether a point-only purchase or a late leftover window is still \
                         open to keep the year from counting as inactive."
            .to_string(),
        call_to_action: format!("Review {} options", d.region),
        portfolio_context: None,
        temporal_context: Some(format!("{} day(s) overdue", d.days_overdue)),
    }
}

pub fn from_upcoming_deadline(d: &UpcomingDeadline) -> AdvisorInsight {
    AdvisorInsight {
        id: format!("deadline-upcoming-{}", d.milestone_id),
        category: InsightCategory::Deadline,
        urgency: Urgency::Soon,
        interpretation: format!("The {} {} application is due {}.", d.region, d.species, d.due_date),
        recommendation: "Submit the application before the deadline.".to_string(),
        call_to_action: format!("Apply in {}", d.region),
        portfolio_context: None,
        temporal_context: Some(format!("{} day(s) remaining", d.days_remaining)),
    }
}

pub fn from_purge(p: &PurgeAlert) -> AdvisorInsight {
    AdvisorInsight {
        id: format!("purge-{}-{}-{}", p.region, p.species, p.year_of_purge),
        category: InsightCategory::Purge,
        urgency: Urgency::Immediate,
        interpretation: p.message.clone(),
        recommendation: format!(
            "Add a point purchase or application for {} {} before {}.",
            p.region, p.species, p.year_of_purge
        ),
        call_to_action: "Protect points".to_string(),
        portfolio_context: Some(format!(
            "{} points, ${:.0} sunk",
            p.current_points, p.sunk_value
        )),
        temporal_context: Some(format!("Purge in {}", p.year_of_purge)),
    }
}

pub fn from_conflict(c: &PlanConflict) -> AdvisorInsight {
    let urgency = match c.severity {
        Severity::Critical => Urgency::Immediate,
        Severity::Warning => Urgency::Soon,
        Severity::Info => Urgency::Informational,
    };
    AdvisorInsight {
        id: format!("conflict-{}", c.id),
        category: InsightCategory::Conflict,
        urgency,
        interpretation: c.description.clone(),
        recommendation: c.resolution.clone(),
        call_to_action: "Edit roadmap".to_string(),
        portfolio_context: Some(c.title.clone()),
        temporal_context: Some(c.year.to_string()),
    }
}

pub fn from_disaster(a: &SuccessDisasterAlert) -> AdvisorInsight {
    AdvisorInsight {
        id: a.id.clone(),
        category: InsightCategory::SuccessDisaster,
        urgency: Urgency::Immediate,
        interpretation: a.description.clone(),
        recommendation: "Decide now which drawn tag to turn back or how to cover the gap."
            .to_string(),
        call_to_action: "Review drawn tags".to_string(),
        portfolio_context: Some(a.title.clone()),
        temporal_context: Some(a.year.to_string()),
    }
}

/// A positive note when the composite clears `threshold`.
pub fn from_health(h: &HealthScoreBreakdown, threshold: f64) -> Option<AdvisorInsight> {
    (h.composite >= threshold).then(|| AdvisorInsight {
        id: "health-positive".to_string(),
        category: InsightCategory::PortfolioHealth,
        urgency: Urgency::Positive,
        interpretation: format!("Portfolio health is strong at {:.0}/100.", h.composite),
        recommendation: "Stay the course.".to_string(),
        call_to_action: "View health breakdown".to_string(),
        portfolio_context: None,
        temporal_context: None,
    })
}
