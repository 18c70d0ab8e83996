pub mod error;
pub mod io;
pub mod models;
pub mod simulation;
pub mod visualization;

pub use error::SimulatorError;
pub use io::{CsvFormat, JsonFormat, TrajectoryWriter};
pub use models::{GrowthCurve, Scenario};
pub use simulation::{Simulator, TrajectoryPoint, TrajectorySummary};
