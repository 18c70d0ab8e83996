mod csv_io;
mod json_io;

use std::path::Path;

use crate::error::SimulatorError;
use crate::simulation::TrajectoryPoint;

pub use csv_io::write_csv;
pub use json_io::write_json;

/// Trait for writing a simulated trajectory to a file.
pub trait TrajectoryWriter {
    fn write(&self, points: &[TrajectoryPoint], path: &Path) -> Result<(), SimulatorError>;
}

/// CSV format writer.
pub struct CsvFormat;

impl TrajectoryWriter for CsvFormat {
    fn write(&self, points: &[TrajectoryPoint], path: &Path) -> Result<(), SimulatorError> {
        write_csv(points, path)
    }
}

/// JSON format writer.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl TrajectoryWriter for JsonFormat {
    fn write(&self, points: &[TrajectoryPoint], path: &Path) -> Result<(), SimulatorError> {
        write_json(points, path, self.pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scenario;
    use crate::simulation::simulate;
    use tempfile::TempDir;

    #[test]
    fn test_csv_format_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trajectory.csv");
        let points = simulate(&Scenario::default().with_years(5));
        CsvFormat.write(&points, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_json_format_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trajectory.json");
        let points = simulate(&Scenario::default().with_years(5));
        JsonFormat { pretty: true }.write(&points, &path).unwrap();
        assert!(path.exists());
    }
}
