use crate::models::GrowthCurve;

/// Compute the raw annual increment for the given population.
///
/// Above the reference population the saturating branch applies: the
/// increment shrinks as the population grows and turns negative once
/// `(fraction / (max_pop * limit))^2` exceeds `1 / limit_sqr`. At or below
/// the reference population (equality included) the sub-reference branch
/// produces a small, always-positive increment.
pub fn raw_growth_delta(population: f64, curve: &GrowthCurve) -> f64 {
    let fraction = population / curve.reference_population;

    if fraction > 1.0 {
        let x = fraction / (curve.max_pop * curve.limit);
        let x = -(x * x) + 1.0 / curve.limit_sqr;
        population * (x * curve.damping)
    } else {
        // The grouping is (fraction / 0.2) + 5.0, not fraction / (0.2 + 5.0).
        let x = fraction / 0.2 + 5.0;
        let x = 10.0 / (x * x + 20.0);
        population * (x * curve.damping)
    }
}

/// Compute the applied annual increment: the raw increment, bumped by
/// `growth_bump` whenever it falls below `min_growth`.
///
/// The bump applies to the increment itself, in both branches, even when
/// the raw increment is negative.
pub fn growth_delta(population: f64, curve: &GrowthCurve) -> f64 {
    let mut delta = raw_growth_delta(population, curve);
    if delta < curve.min_growth {
        delta += curve.growth_bump;
    }
    delta
}

/// Advance the population by one year.
pub fn advance(population: f64, curve: &GrowthCurve) -> f64 {
    population + growth_delta(population, curve)
}
