use super::{simulate, summarize, TrajectoryPoint, TrajectorySummary};
use crate::error::SimulatorError;
use crate::models::Scenario;

/// Unified API that groups the simulation operations on a scenario.
pub struct Simulator<'a> {
    scenario: &'a Scenario,
}

impl<'a> Simulator<'a> {
    /// Create a new Simulator for the given scenario.
    pub fn new(scenario: &'a Scenario) -> Self {
        Self { scenario }
    }

    /// Run the scenario and collect its trajectory.
    pub fn trajectory(&self) -> Vec<TrajectoryPoint> {
        simulate(self.scenario)
    }

    /// Run the scenario and summarize the resulting trajectory.
    pub fn summary(&self) -> Result<TrajectorySummary, SimulatorError> {
        summarize(&self.trajectory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_matches_standalone() {
        let scenario = Scenario::default().with_years(25);
        let simulator = Simulator::new(&scenario);
        let from_simulator = simulator.trajectory();
        let from_standalone = simulate(&scenario);
        assert_eq!(from_simulator.len(), from_standalone.len());
        for (a, b) in from_simulator.iter().zip(from_standalone.iter()) {
            assert_eq!(a.population.to_bits(), b.population.to_bits());
        }
    }

    #[test]
    fn test_summary_matches_standalone() {
        let scenario = Scenario::default().with_years(25);
        let simulator = Simulator::new(&scenario);
        let from_simulator = simulator.summary().unwrap();
        let from_standalone = summarize(&simulate(&scenario)).unwrap();
        assert_eq!(from_simulator.years, from_standalone.years);
        assert!(
            (from_simulator.final_population - from_standalone.final_population).abs() < 1e-9
        );
    }

    #[test]
    fn test_zero_year_scenario_summary_errors() {
        let scenario = Scenario::default().with_years(0);
        let simulator = Simulator::new(&scenario);
        assert!(simulator.trajectory().is_empty());
        assert!(simulator.summary().is_err());
    }
}
