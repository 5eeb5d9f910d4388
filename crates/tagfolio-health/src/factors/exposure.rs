use tagfolio_core::models::Roadmap;

/// Share of first-year spend on long-shot applications, inverted.
///
/// Actions without odds are not counted as long shots.
pub fn calculate(roadmap: &Roadmap, long_shot_odds: f64) -> f64 {
    let Some(first) = roadmap.iter().next() else {
        return 100.0;
    };

    let total: f64 = first.actions.iter().map(|a| a.cost).sum();
    if total <= 0.0 {
        return 100.0;
    }

    let long_shot: f64 = first
        .actions
        .iter()
        .filter(|a| a.estimated_draw_odds.is_some_and(|p| p < long_shot_odds))
        .map(|a| a.cost)
        .sum();

    100.0 - long_shot / total * 100.0
}
