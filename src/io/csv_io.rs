use std::path::Path;

use tracing::debug;

use crate::error::SimulatorError;
use crate::simulation::TrajectoryPoint;

/// Write a trajectory to a CSV file with a `year,population` header.
pub fn write_csv(points: &[TrajectoryPoint], path: impl AsRef<Path>) -> Result<(), SimulatorError> {
    debug!(rows = points.len(), path = %path.as_ref().display(), "writing CSV trajectory");

    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for point in points {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}
