use tagfolio_core::models::{Mandate, Roadmap};

/// Years from `as_of_year` until the first planned hunt.
///
/// With no hunt at all, the full horizon counts as waiting.
pub fn years_until_first_hunt(roadmap: &Roadmap, mandate: &Mandate, as_of_year: i32) -> u32 {
    match roadmap.first_hunt() {
        Some((year, _)) => (year - as_of_year).max(0) as u32,
        None => (roadmap.len() as u32).max(mandate.time_horizon_years),
    }
}

pub fn calculate(roadmap: &Roadmap, mandate: &Mandate, as_of_year: i32, penalty_per_year: f64) -> f64 {
    let waiting = years_until_first_hunt(roadmap, mandate, as_of_year);
    (100.0 - penalty_per_year * f64::from(waiting)).max(0.0)
}
