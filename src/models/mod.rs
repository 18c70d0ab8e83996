mod curve;
mod scenario;

pub use curve::GrowthCurve;
pub use scenario::Scenario;
