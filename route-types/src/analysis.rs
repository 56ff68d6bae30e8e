//! Results produced by the analysis pipeline.

use crate::waypoint::Waypoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a spatial cell at some resolution.
///
/// Two waypoints binned at the same resolution share a `CellId` iff they fall
/// in the same cell. Only equality and hashing are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(u64);

impl CellId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for CellId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// The waypoint farthest from the start of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FarthestResult {
    pub waypoint: Waypoint,
    pub distance_km: f64,
}

/// All waypoints that share the most populated cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotResult {
    /// The winning cell
    pub cell: CellId,
    /// Members in original track order
    pub members: Vec<Waypoint>,
    /// Population of the winning cell
    pub cell_count: usize,
}

impl HotspotResult {
    /// First member of the hotspot, reported as its representative waypoint.
    pub fn central_waypoint(&self) -> Option<&Waypoint> {
        self.members.first()
    }
}

/// Waypoints found outside a circular geofence, in original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeofenceResult {
    pub outside: Vec<Waypoint>,
}

impl GeofenceResult {
    pub fn len(&self) -> usize {
        self.outside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outside.is_empty()
    }
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub farthest: FarthestResult,
    pub hotspot: HotspotResult,
    /// Radius the hotspot resolution was chosen for, explicit or derived
    pub hotspot_radius_km: f64,
    pub resolution: u8,
    pub geofence: GeofenceResult,
    pub geofence_center: Waypoint,
    pub geofence_radius_km: f64,
}
