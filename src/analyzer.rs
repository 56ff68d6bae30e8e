//! Pipeline orchestration.
//!
//! [`Analyzer`] runs the farthest-point scan, picks a hotspot resolution,
//! bins the track and applies the geofence, then assembles an
//! [`AnalysisReport`]. Any failure aborts the run; no partial report is built.

use crate::compute::spatial::{
    detect_hotspot, farthest_from_start, outside_geofence, resolution_for_radius,
};
use crate::compute::validation::validate_track;
use crate::config::AnalysisParameters;
use crate::error::{Result, RouteError};
use crate::index::{H3Index, SpatialIndex};
use geo::{BoundingRect, MultiPoint};
use route_types::analysis::AnalysisReport;
use route_types::waypoint::Waypoint;

/// Hotspot radius used for tracks spanning less than a kilometre.
pub const SHORT_TRACK_HOTSPOT_RADIUS_KM: f64 = 0.1;

/// Tracks at least this long derive their hotspot radius from their extent.
const SHORT_TRACK_LIMIT_KM: f64 = 1.0;

/// The derived hotspot radius is the farthest distance divided by this.
const HOTSPOT_RADIUS_DIVISOR: f64 = 10.0;

/// Hotspot radius for a run: the explicit one, or one scaled to the track.
///
/// ```
/// use route_analyzer::analyzer::hotspot_radius_km;
///
/// assert_eq!(hotspot_radius_km(Some(2.5), 4000.0), 2.5);
/// assert_eq!(hotspot_radius_km(None, 0.4), 0.1);
/// assert_eq!(hotspot_radius_km(None, 250.0), 25.0);
/// ```
pub fn hotspot_radius_km(explicit: Option<f64>, farthest_distance_km: f64) -> f64 {
    explicit.unwrap_or(if farthest_distance_km < SHORT_TRACK_LIMIT_KM {
        SHORT_TRACK_HOTSPOT_RADIUS_KM
    } else {
        farthest_distance_km / HOTSPOT_RADIUS_DIVISOR
    })
}

/// Runs the analysis pipeline over a spatial index.
#[derive(Debug, Clone, Default)]
pub struct Analyzer<I = H3Index> {
    index: I,
}

impl Analyzer<H3Index> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: SpatialIndex> Analyzer<I> {
    /// Use a different hierarchical partition for hotspot binning.
    pub fn with_index(index: I) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Analyse a track.
    ///
    /// # Errors
    ///
    /// - [`RouteError::EmptyTrack`] when `track` is empty
    /// - [`RouteError::MissingParameters`] when `params` is `None`
    /// - [`RouteError::InvalidRadius`] when the hotspot radius is too small to bin
    /// - validation errors for out-of-range parameters or waypoints
    pub fn analyze(
        &self,
        track: &[Waypoint],
        params: Option<&AnalysisParameters>,
    ) -> Result<AnalysisReport> {
        if track.is_empty() {
            return Err(RouteError::EmptyTrack);
        }
        let params = params.ok_or(RouteError::MissingParameters)?;
        params.validate()?;
        validate_track(track)?;

        if log::log_enabled!(log::Level::Debug) {
            let points: MultiPoint = track.iter().map(Waypoint::point).collect();
            if let Some(bounds) = points.bounding_rect() {
                log::debug!(
                    "track of {} waypoints, bounds lat [{:.5}, {:.5}] lon [{:.5}, {:.5}]",
                    track.len(),
                    bounds.min().y,
                    bounds.max().y,
                    bounds.min().x,
                    bounds.max().x
                );
            }
        }

        let farthest = farthest_from_start(track, params.earth_radius_km)?;
        log::debug!(
            "farthest waypoint at t={} is {:.3} km from start",
            farthest.waypoint.timestamp(),
            farthest.distance_km
        );

        let radius_km = hotspot_radius_km(params.most_frequented_area_radius_km, farthest.distance_km);
        let resolution = resolution_for_radius(radius_km)?;
        log::debug!(
            "hotspot radius {:.4} km -> resolution {}",
            radius_km,
            resolution
        );

        let hotspot = detect_hotspot(&self.index, track, resolution)?;

        let geofence = outside_geofence(
            track,
            params.geofence_center_latitude,
            params.geofence_center_longitude,
            params.geofence_radius_km,
            params.earth_radius_km,
        )?;

        log::info!(
            "analysed {} waypoints: farthest {:.3} km, hotspot {} waypoints, {} outside geofence",
            track.len(),
            farthest.distance_km,
            hotspot.cell_count,
            geofence.len()
        );

        Ok(AnalysisReport {
            farthest,
            hotspot,
            hotspot_radius_km: radius_km,
            resolution,
            geofence,
            geofence_center: params.geofence_center(),
            geofence_radius_km: params.geofence_radius_km,
        })
    }
}

/// Analyse a track with the default H3 index.
///
/// ```
/// use route_analyzer::{analyze, AnalysisParameters, Waypoint};
///
/// let track = vec![
///     Waypoint::new(1.0, 37.7749, -122.4194),
///     Waypoint::new(2.0, 34.0522, -118.2437),
///     Waypoint::new(3.0, 40.7128, -74.0060),
/// ];
/// let params = AnalysisParameters::new(6371.0, 37.7749, -122.4194, 50.0);
///
/// let report = analyze(&track, Some(&params))?;
/// assert_eq!(report.farthest.waypoint, track[2]);
/// assert_eq!(report.geofence.len(), 2);
/// # Ok::<(), route_analyzer::RouteError>(())
/// ```
pub fn analyze(track: &[Waypoint], params: Option<&AnalysisParameters>) -> Result<AnalysisReport> {
    Analyzer::new().analyze(track, params)
}
