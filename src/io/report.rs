//! Rendering of analysis reports as JSON documents.

use crate::error::Result;
use route_types::analysis::AnalysisReport;
use route_types::output::Output;
use std::fs;
use std::path::Path;

/// Render a report as a pretty-printed output document.
pub fn to_json_pretty(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Output::try_from(report)?)?)
}

/// Write the output document for `report` to `path`, creating parent
/// directories as needed.
pub fn write_report(path: impl AsRef<Path>, report: &AnalysisReport) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, to_json_pretty(report)?)?;
    log::info!("wrote report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::{AnalysisParameters, Waypoint, analyze};

    fn report() -> AnalysisReport {
        let track = vec![
            Waypoint::new(1.0, 37.7749, -122.4194),
            Waypoint::new(2.0, 34.0522, -118.2437),
            Waypoint::new(3.0, 40.7128, -74.0060),
        ];
        let params = AnalysisParameters::new(6371.0, 37.7749, -122.4194, 50.0);
        analyze(&track, Some(&params)).unwrap()
    }

    #[test]
    fn test_render_document() {
        let json = to_json_pretty(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value["maxDistanceFromStart"]["waypoint"]["latitude"],
            40.7128
        );
        assert_eq!(value["waypointsOutsideGeofence"]["count"], 2);
        assert_eq!(value["waypointsOutsideGeofence"]["areaRadiusKm"], 50.0);
        assert_eq!(
            value["waypointsOutsideGeofence"]["centralWaypoint"]["timestamp"],
            0.0
        );
        assert_eq!(value["mostFrequentedArea"]["entriesCount"], 1);
    }

    #[test]
    fn test_render_is_stable() {
        assert_eq!(
            to_json_pretty(&report()).unwrap(),
            to_json_pretty(&report()).unwrap()
        );
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluation").join("output.json");

        write_report(&path, &report()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let output: Output = serde_json::from_str(&written).unwrap();
        assert_eq!(output.waypoints_outside_geofence.waypoints.len(), 2);
    }

    #[test]
    fn test_render_rejects_empty_hotspot() {
        let mut report = report();
        report.hotspot.members.clear();

        let err = to_json_pretty(&report).unwrap_err();
        assert!(matches!(err, RouteError::InvalidReport(_)));
    }
}
