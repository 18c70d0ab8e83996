mod growth;
mod simulator;
mod summary;
mod trajectory;

pub use growth::{advance, growth_delta, raw_growth_delta};
pub use simulator::Simulator;
pub use summary::{summarize, TrajectorySummary};
pub use trajectory::{simulate, TrajectoryPoint};
