use tagfolio_core::config::HealthConfig;
use tagfolio_core::models::Severity;

/// 100 less a fixed penalty per violation by severity, floored at 0.
pub fn calculate(severities: impl IntoIterator<Item = Severity>, config: &HealthConfig) -> f64 {
    let penalty: f64 = severities
        .into_iter()
        .map(|s| match s {
            Severity::Critical => config.critical_penalty,
            Severity::Warning => config.warning_penalty,
            Severity::Info => config.info_penalty,
        })
        .sum();
    (100.0 - penalty).max(0.0)
}
