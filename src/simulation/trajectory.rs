use serde::{Deserialize, Serialize};
use tracing::debug;

use super::growth::advance;
use crate::models::Scenario;

/// A single year of a simulated trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub year: u32,
    pub population: f64,
}

/// Run a scenario and collect one point per simulated year.
///
/// Each point records the population as it stands at the start of that
/// year, before the year's increment is applied; the increment computed in
/// the final year is carried out but never recorded. A zero-year scenario
/// yields an empty trajectory. Given the same scenario the result is
/// bit-for-bit reproducible.
pub fn simulate(scenario: &Scenario) -> Vec<TrajectoryPoint> {
    debug!(
        years = scenario.years,
        initial = scenario.initial_population,
        "simulating trajectory"
    );

    let mut population = scenario.initial_population;
    let mut points = Vec::with_capacity(scenario.years as usize);

    for year in 0..scenario.years {
        points.push(TrajectoryPoint { year, population });
        population = advance(population, &scenario.curve);
    }

    points
}
