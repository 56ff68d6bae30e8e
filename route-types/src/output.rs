//! Serialized shape of an [`AnalysisReport`].
//!
//! Field names and nesting form the external contract of the output
//! document and are kept stable independently of the internal report.

use crate::analysis::AnalysisReport;
use crate::waypoint::Waypoint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxDistanceFromStart {
    pub waypoint: Waypoint,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MostFrequentedArea {
    pub central_waypoint: Waypoint,
    pub area_radius_km: f64,
    pub entries_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointsOutsideGeofence {
    pub central_waypoint: Waypoint,
    pub area_radius_km: f64,
    pub count: usize,
    pub waypoints: Vec<Waypoint>,
}

/// Top-level output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub max_distance_from_start: MaxDistanceFromStart,
    pub most_frequented_area: MostFrequentedArea,
    pub waypoints_outside_geofence: WaypointsOutsideGeofence,
}

/// A report whose hotspot has no members cannot name a central waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hotspot has no members")]
pub struct EmptyHotspot;

impl TryFrom<&AnalysisReport> for Output {
    type Error = EmptyHotspot;

    fn try_from(report: &AnalysisReport) -> Result<Self, Self::Error> {
        let central = *report.hotspot.central_waypoint().ok_or(EmptyHotspot)?;

        Ok(Self {
            max_distance_from_start: MaxDistanceFromStart {
                waypoint: report.farthest.waypoint,
                distance_km: report.farthest.distance_km,
            },
            most_frequented_area: MostFrequentedArea {
                central_waypoint: central,
                area_radius_km: report.hotspot_radius_km,
                entries_count: report.hotspot.cell_count,
            },
            waypoints_outside_geofence: WaypointsOutsideGeofence {
                central_waypoint: report.geofence_center,
                area_radius_km: report.geofence_radius_km,
                count: report.geofence.len(),
                waypoints: report.geofence.outside.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{CellId, FarthestResult, GeofenceResult, HotspotResult};

    fn sample_report() -> AnalysisReport {
        let sf = Waypoint::new(1.0, 37.7749, -122.4194);
        let la = Waypoint::new(2.0, 34.0522, -118.2437);
        let ny = Waypoint::new(3.0, 40.7128, -74.0060);
        AnalysisReport {
            farthest: FarthestResult {
                waypoint: ny,
                distance_km: 4129.0,
            },
            hotspot: HotspotResult {
                cell: CellId::new(42),
                members: vec![sf],
                cell_count: 1,
            },
            hotspot_radius_km: 412.9,
            resolution: 4,
            geofence: GeofenceResult {
                outside: vec![la, ny],
            },
            geofence_center: Waypoint::location(37.7749, -122.4194),
            geofence_radius_km: 50.0,
        }
    }

    #[test]
    fn test_output_from_report() {
        let report = sample_report();
        let output = Output::try_from(&report).unwrap();

        assert_eq!(output.max_distance_from_start.waypoint.latitude(), 40.7128);
        assert_eq!(output.most_frequented_area.entries_count, 1);
        assert_eq!(output.most_frequented_area.area_radius_km, 412.9);
        assert_eq!(output.waypoints_outside_geofence.count, 2);
        assert_eq!(
            output.waypoints_outside_geofence.central_waypoint.timestamp(),
            0.0
        );
    }

    #[test]
    fn test_output_field_names() {
        let output = Output::try_from(&sample_report()).unwrap();
        let value = serde_json::to_value(&output).unwrap();

        assert!(value["maxDistanceFromStart"]["distanceKm"].is_f64());
        assert!(value["mostFrequentedArea"]["centralWaypoint"].is_object());
        assert_eq!(value["mostFrequentedArea"]["entriesCount"], 1);
        assert_eq!(value["waypointsOutsideGeofence"]["count"], 2);
        assert_eq!(
            value["waypointsOutsideGeofence"]["waypoints"]
                .as_array()
                .map(|w| w.len()),
            Some(2)
        );
    }

    #[test]
    fn test_empty_hotspot_is_rejected() {
        let mut report = sample_report();
        report.hotspot.members.clear();
        report.hotspot.cell_count = 0;

        assert_eq!(Output::try_from(&report), Err(EmptyHotspot));
    }
}
