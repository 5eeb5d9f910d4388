//! Whether the first hunt lands while the hunter is physically suited to it.

use tagfolio_core::config::HealthConfig;
use tagfolio_core::models::{Mandate, Roadmap};
use tagfolio_core::Species;

/// Inclusive ideal age window for `species`.
pub fn ideal_window(species: Species, config: &HealthConfig) -> (i32, i32) {
    if species.is_physically_demanding() {
        config.demanding_age
    } else {
        config.ideal_age
    }
}

/// Years outside `window`, 0 when inside.
pub fn years_outside(age: i32, (min, max): (i32, i32)) -> i32 {
    if age < min {
        min - age
    } else if age > max {
        age - max
    } else {
        0
    }
}

pub fn calculate(roadmap: &Roadmap, mandate: &Mandate, as_of_year: i32, config: &HealthConfig) -> f64 {
    let Some((year, hunt)) = roadmap.first_hunt() else {
        return config.horizon_no_hunt;
    };
    let Some(age) = mandate.age_in(year, as_of_year) else {
        return config.horizon_unknown_age;
    };

    let outside = years_outside(age, ideal_window(hunt.species, config));
    let penalty = (f64::from(outside) * config.horizon_penalty_per_year).min(config.horizon_penalty_cap);
    100.0 - penalty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_counts_distance_to_nearest_edge() {
        assert_eq!(years_outside(14, (16, 60)), 2);
        assert_eq!(years_outside(16, (16, 60)), 0);
        assert_eq!(years_outside(55, (20, 50)), 5);
    }

    #[test]
    fn sheep_use_narrow_window() {
        let cfg = HealthConfig::default();
        assert_eq!(ideal_window(Species::BighornSheep, &cfg), (20, 50));
        assert_eq!(ideal_window(Species::Elk, &cfg), (16, 60));
    }
}
