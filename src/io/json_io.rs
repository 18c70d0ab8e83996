use std::path::Path;

use tracing::debug;

use crate::error::SimulatorError;
use crate::simulation::TrajectoryPoint;

/// Write a trajectory to a JSON file.
pub fn write_json(
    points: &[TrajectoryPoint],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), SimulatorError> {
    debug!(rows = points.len(), path = %path.as_ref().display(), "writing JSON trajectory");

    let content = if pretty {
        serde_json::to_string_pretty(points)?
    } else {
        serde_json::to_string(points)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scenario;
    use crate::simulation::simulate;
    use tempfile::TempDir;

    #[test]
    fn test_write_json_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trajectory.json");
        let points = simulate(&Scenario::default().with_years(10));
        write_json(&points, &path, false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<TrajectoryPoint> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[9].year, 9);
        assert!((rows[0].population - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_write_json_pretty_is_indented() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trajectory.json");
        let points = simulate(&Scenario::default().with_years(2));
        write_json(&points, &path, true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("  "));
    }

    #[test]
    fn test_write_json_empty_trajectory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trajectory.json");
        write_json(&[], &path, false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[]");
    }
}
