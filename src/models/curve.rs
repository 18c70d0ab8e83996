use serde::{Deserialize, Serialize};

/// Configurable growth curve coefficients.
///
/// The annual increment is computed from the population fraction
/// `p = P / reference_population`. Above the reference level the curve
/// saturates and eventually turns negative; below it the increment stays
/// small and positive. Increments below `min_growth` get `growth_bump`
/// added to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthCurve {
    /// Population scale against which the branch fraction is computed
    pub reference_population: f64,
    /// Saturation scale in units of the reference population
    pub max_pop: f64,
    /// Spread of the saturation term
    pub limit: f64,
    /// Offset of the saturation term; an independent coefficient, not
    /// derived from `limit`
    pub limit_sqr: f64,
    /// Damping factor applied to the relative increment in both branches
    pub damping: f64,
    /// Increments below this threshold receive the bump
    pub min_growth: f64,
    /// Added to the increment itself whenever it falls below `min_growth`,
    /// even when the increment is negative
    pub growth_bump: f64,
}

impl Default for GrowthCurve {
    fn default() -> Self {
        Self {
            reference_population: 1_000_000.0,
            max_pop: 16.0,
            limit: 4.0,
            limit_sqr: 16.0,
            damping: 0.4,
            min_growth: 1.0,
            growth_bump: 1.5,
        }
    }
}
