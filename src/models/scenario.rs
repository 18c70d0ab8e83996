use serde::{Deserialize, Serialize};

use super::GrowthCurve;

/// A complete simulation scenario: where the population starts, how many
/// years to run, and the curve that drives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Name or identifier for this scenario
    pub name: String,
    /// Population at year 0
    pub initial_population: f64,
    /// Number of years to simulate
    pub years: u32,
    /// Growth curve coefficients
    pub curve: GrowthCurve,
}

impl Scenario {
    /// Create a scenario with the default curve and canonical start values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replace the initial population.
    pub fn with_initial_population(mut self, population: f64) -> Self {
        self.initial_population = population;
        self
    }

    /// Replace the number of simulated years.
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: String::new(),
            initial_population: 100.0,
            years: 1000,
            curve: GrowthCurve::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start_values() {
        let scenario = Scenario::default();
        assert!((scenario.initial_population - 100.0).abs() < 1e-9);
        assert_eq!(scenario.years, 1000);
    }

    #[test]
    fn test_new_keeps_defaults() {
        let scenario = Scenario::new("Baseline");
        assert_eq!(scenario.name, "Baseline");
        assert!((scenario.initial_population - 100.0).abs() < 1e-9);
        assert_eq!(scenario.years, 1000);
    }

    #[test]
    fn test_builder_overrides() {
        let scenario = Scenario::new("Custom")
            .with_initial_population(2500.0)
            .with_years(50);
        assert!((scenario.initial_population - 2500.0).abs() < 1e-9);
        assert_eq!(scenario.years, 50);
    }

    #[test]
    fn test_scenario_json_roundtrip() {
        let scenario = Scenario::new("Roundtrip").with_years(10);
        let json = serde_json::to_string(&scenario).unwrap();
        let deserialized: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.name, "Roundtrip");
        assert_eq!(deserialized.years, 10);
        assert!((deserialized.curve.damping - 0.4).abs() < 1e-9);
    }
}
