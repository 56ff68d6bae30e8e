//! Great-circle distance on a sphere of configurable radius.

use crate::compute::validation::validate_earth_radius;
use crate::error::Result;
use route_types::waypoint::Waypoint;

/// Haversine distance in kilometres between two latitude/longitude pairs.
///
/// Unlike `geo::Haversine`, which fixes the mean Earth radius, the sphere
/// radius is a parameter here so tracks can be analysed against any model.
///
/// Identical coordinates yield exactly `0.0`. The intermediate term is clamped
/// to `[0, 1]` so rounding near antipodal points never produces NaN.
///
/// # Errors
///
/// [`RouteError::InvalidEarthRadius`](crate::RouteError::InvalidEarthRadius)
/// when `earth_radius_km` is not finite or not positive.
///
/// # Examples
///
/// ```
/// use route_analyzer::compute::spatial::haversine_km;
///
/// // San Francisco to Los Angeles
/// let d = haversine_km(37.7749, -122.4194, 34.0522, -118.2437, 6371.0)?;
/// assert!((d - 559.1).abs() < 0.1);
///
/// assert!(haversine_km(0.0, 0.0, 1.0, 1.0, 0.0).is_err());
/// # Ok::<(), route_analyzer::RouteError>(())
/// ```
pub fn haversine_km(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    earth_radius_km: f64,
) -> Result<f64> {
    validate_earth_radius(earth_radius_km)?;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2.to_radians() - lon1.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Ok(earth_radius_km * c)
}

/// Haversine distance in kilometres between two waypoints.
#[inline]
pub fn distance_between(from: &Waypoint, to: &Waypoint, earth_radius_km: f64) -> Result<f64> {
    haversine_km(
        from.latitude(),
        from.longitude(),
        to.latitude(),
        to.longitude(),
        earth_radius_km,
    )
}
