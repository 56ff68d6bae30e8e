//! Circular geofence containment.

use crate::compute::spatial::distance::haversine_km;
use crate::compute::validation::{validate_earth_radius, validate_geofence_radius};
use crate::error::Result;
use route_types::analysis::GeofenceResult;
use route_types::waypoint::Waypoint;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Collect the waypoints lying strictly farther than `radius_km` from the center.
///
/// Points exactly on the boundary count as inside. Output keeps track order.
/// `radius_km` must be finite and non-negative.
///
/// # Examples
///
/// ```
/// use route_analyzer::compute::spatial::outside_geofence;
/// use route_analyzer::Waypoint;
///
/// let track = vec![
///     Waypoint::new(1.0, 37.7749, -122.4194), // San Francisco
///     Waypoint::new(2.0, 34.0522, -118.2437), // Los Angeles
/// ];
///
/// let result = outside_geofence(&track, 37.7749, -122.4194, 50.0, 6371.0)?;
/// assert_eq!(result.outside, vec![track[1]]);
/// # Ok::<(), route_analyzer::RouteError>(())
/// ```
pub fn outside_geofence(
    track: &[Waypoint],
    center_lat: f64,
    center_lon: f64,
    radius_km: f64,
    earth_radius_km: f64,
) -> Result<GeofenceResult> {
    validate_earth_radius(earth_radius_km)?;
    validate_geofence_radius(radius_km)?;

    let is_outside = |wp: &Waypoint| -> Result<bool> {
        let distance = haversine_km(
            center_lat,
            center_lon,
            wp.latitude(),
            wp.longitude(),
            earth_radius_km,
        )?;
        Ok(distance > radius_km)
    };

    #[cfg(feature = "parallel")]
    let flags = track.par_iter().map(is_outside).collect::<Result<Vec<bool>>>()?;
    #[cfg(not(feature = "parallel"))]
    let flags = track.iter().map(is_outside).collect::<Result<Vec<bool>>>()?;

    let outside = track
        .iter()
        .zip(flags)
        .filter_map(|(wp, outside)| outside.then_some(*wp))
        .collect();

    Ok(GeofenceResult { outside })
}
