//! PortfolioEngine: validates a snapshot and runs every component over it.

use tagfolio_advisor::{AdvisorInput, InsightGenerator};
use tagfolio_capital::{compute_burn_rate_matrix, compute_capital_summary};
use tagfolio_conflicts::ConflictResolver;
use tagfolio_core::config::EngineConfig;
use tagfolio_core::errors::{TagfolioResult, ValidationError};
use tagfolio_core::models::{DrawOdds, DrawProjection};
use tagfolio_fiduciary::FiduciaryDispatcher;
use tagfolio_health::{HealthInput, HealthScorer};
use tagfolio_odds::{DrawOddsQuery, OddsEngine};
use tagfolio_purge::{PurgeDetector, PurgeRuleTable};
use tracing::info;

use crate::report::PortfolioReport;
use crate::snapshot::PortfolioSnapshot;
use crate::{
    advisor_span, analyze_span, capital_span, conflicts_span, fiduciary_span, health_span,
    purge_span,
};

/// Holds one component per analysis, all configured from one [`EngineConfig`].
#[derive(Debug, Clone)]
pub struct PortfolioEngine {
    config: EngineConfig,
    odds: OddsEngine,
    conflicts: ConflictResolver,
    purge: PurgeDetector,
    fiduciary: FiduciaryDispatcher,
    health: HealthScorer,
    advisor: InsightGenerator,
}

impl Default for PortfolioEngine {
    fn default() -> Self {
        Self::build(EngineConfig::default())
    }
}

impl PortfolioEngine {
    /// Validate `config` and build every component from it.
    pub fn new(config: EngineConfig) -> TagfolioResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    pub fn from_toml_str(s: &str) -> TagfolioResult<Self> {
        Ok(Self::build(EngineConfig::from_toml_str(s)?))
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            odds: OddsEngine::new(config.projection.clone()),
            conflicts: ConflictResolver::new(config.conflicts.clone()),
            purge: PurgeDetector::new(PurgeRuleTable::from_config(&config.purge)),
            fiduciary: FiduciaryDispatcher::new(config.fiduciary.clone()),
            health: HealthScorer::new(config.health.clone()),
            advisor: InsightGenerator::new(config.advisor.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Creep rate from a 0–10 competitiveness signal.
    pub fn estimate_creep_rate(&self, signal: f64) -> Result<f64, ValidationError> {
        self.odds.estimate_creep_rate(signal)
    }

    pub fn project_draw(&self, current_points: u32, required_points: f64, creep_rate: f64) -> DrawProjection {
        self.odds.project(current_points, required_points, creep_rate)
    }

    pub fn draw_odds(&self, query: &DrawOddsQuery) -> Result<DrawOdds, ValidationError> {
        self.odds.odds(query)
    }

    /// Run every component over `snapshot`.
    ///
    /// Conflicts, purge, fiduciary, and capital are independent and run
    /// concurrently; health and the advisor consume their results. The
    /// output is the same as a sequential run.
    pub fn analyze(&self, snapshot: &PortfolioSnapshot) -> TagfolioResult<PortfolioReport> {
        let _span = analyze_span!(snapshot.as_of, snapshot.roadmap.len()).entered();
        snapshot.validate()?;

        let as_of_year = snapshot.as_of_year();
        let roadmap = &snapshot.roadmap;
        let fees = snapshot.fee_schedule();

        let ((conflicts, purge_alerts), ((missed, upcoming, disasters), (capital, burn_rate))) =
            rayon::join(
                || {
                    rayon::join(
                        || {
                            conflicts_span!(roadmap.len()).in_scope(|| {
                                self.conflicts.resolve(
                                    roadmap,
                                    &snapshot.ledger,
                                    &snapshot.mandate,
                                    as_of_year,
                                )
                            })
                        },
                        || {
                            purge_span!(snapshot.ledger.len()).in_scope(|| {
                                self.purge.detect(roadmap, &snapshot.ledger, &fees)
                            })
                        },
                    )
                },
                || {
                    rayon::join(
                        || {
                            fiduciary_span!(snapshot.milestones.len()).in_scope(|| {
                                let m = &snapshot.milestones;
                                (
                                    self.fiduciary.missed_deadlines(m, snapshot.as_of),
                                    self.fiduciary.upcoming_deadlines(m, snapshot.as_of),
                                    self.fiduciary.success_disasters(
                                        m,
                                        &snapshot.mandate,
                                        roadmap.iter().map(|y| y.year),
                                    ),
                                )
                            })
                        },
                        || {
                            capital_span!(snapshot.ledger.len()).in_scope(|| {
                                (
                                    compute_capital_summary(roadmap),
                                    compute_burn_rate_matrix(
                                        &snapshot.ledger,
                                        &snapshot.draw_histories,
                                        as_of_year,
                                        &self.config.projection,
                                    ),
                                )
                            })
                        },
                    )
                },
            );

        let health = health_span!().in_scope(|| {
            self.health.score(&HealthInput {
                roadmap,
                mandate: &snapshot.mandate,
                conflicts: &conflicts,
                purges: &purge_alerts,
                disasters: &disasters,
                as_of_year,
            })
        });

        let insights = advisor_span!(snapshot.savings_goals.len()).in_scope(|| {
            self.advisor.generate(&AdvisorInput {
                missed_deadlines: &missed,
                upcoming_deadlines: &upcoming,
                purges: &purge_alerts,
                conflicts: &conflicts,
                disasters: &disasters,
                health: Some(&health),
                savings_goals: &snapshot.savings_goals,
                as_of: snapshot.as_of,
            })
        });

        info!(
            conflicts = conflicts.len(),
            purge_alerts = purge_alerts.len(),
            missed = missed.len(),
            disasters = disasters.len(),
            composite = health.composite,
            insights = insights.len(),
            "portfolio analyzed"
        );

        Ok(PortfolioReport {
            conflicts,
            purge_alerts,
            missed_deadlines: missed,
            upcoming_deadlines: upcoming,
            success_disasters: disasters,
            capital,
            burn_rate,
            health,
            insights,
        })
    }
}
