use serde::{Deserialize, Serialize};

use super::trajectory::TrajectoryPoint;
use crate::error::SimulatorError;

/// Headline figures for a simulated trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectorySummary {
    /// Number of recorded years
    pub years: u32,
    pub initial_population: f64,
    pub final_population: f64,
    pub peak_population: f64,
    /// Year the peak was first reached
    pub peak_year: u32,
    /// Final minus initial population
    pub total_growth: f64,
    /// Total growth divided by the number of year-to-year intervals
    pub mean_annual_growth: f64,
    /// First year whose recorded population did not exceed the previous
    /// year's, if the series ever stops climbing
    pub first_plateau_year: Option<u32>,
}

/// Summarize a trajectory.
pub fn summarize(points: &[TrajectoryPoint]) -> Result<TrajectorySummary, SimulatorError> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(SimulatorError::InsufficientData(
                "no trajectory points to summarize".to_string(),
            ))
        }
    };

    let mut peak = first;
    for point in points {
        if point.population > peak.population {
            peak = point;
        }
    }

    let first_plateau_year = points
        .windows(2)
        .find(|w| w[1].population <= w[0].population)
        .map(|w| w[1].year);

    let intervals = points.len().saturating_sub(1);
    let total_growth = last.population - first.population;
    let mean_annual_growth = if intervals > 0 {
        total_growth / intervals as f64
    } else {
        0.0
    };

    Ok(TrajectorySummary {
        years: points.len() as u32,
        initial_population: first.population,
        final_population: last.population,
        peak_population: peak.population,
        peak_year: peak.year,
        total_growth,
        mean_annual_growth,
        first_plateau_year,
    })
}
