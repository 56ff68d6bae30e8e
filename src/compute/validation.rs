//! Validation for geographic coordinates and analysis radii.

use crate::error::{Result, RouteError};
use route_types::waypoint::Waypoint;

/// Validates a latitude/longitude pair in degrees.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use route_analyzer::compute::validation::validate_coordinate;
///
/// assert!(validate_coordinate(40.7128, -74.0060).is_ok());
/// assert!(validate_coordinate(95.0, -74.0).is_err());
/// assert!(validate_coordinate(40.0, 200.0).is_err());
/// ```
pub fn validate_coordinate(latitude: f64, longitude: f64) -> Result<()> {
    if !latitude.is_finite() {
        return Err(RouteError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            latitude
        )));
    }

    if !longitude.is_finite() {
        return Err(RouteError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            longitude
        )));
    }

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(RouteError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            latitude
        )));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(RouteError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            longitude
        )));
    }

    Ok(())
}

/// Validates a waypoint's coordinates and timestamp.
pub fn validate_waypoint(waypoint: &Waypoint) -> Result<()> {
    if !waypoint.timestamp().is_finite() {
        return Err(RouteError::InvalidInput(format!(
            "Timestamp must be finite, got: {}",
            waypoint.timestamp()
        )));
    }
    validate_coordinate(waypoint.latitude(), waypoint.longitude())
}

/// Validates every waypoint of a track.
///
/// # Examples
///
/// ```
/// use route_analyzer::compute::validation::validate_track;
/// use route_analyzer::Waypoint;
///
/// let track = vec![
///     Waypoint::new(1.0, 40.7, -74.0),
///     Waypoint::new(2.0, 40.8, -73.9),
///     Waypoint::new(3.0, 40.0, 999.0), // Invalid
/// ];
///
/// assert!(validate_track(&track).is_err());
/// ```
pub fn validate_track(track: &[Waypoint]) -> Result<()> {
    for (idx, waypoint) in track.iter().enumerate() {
        validate_waypoint(waypoint)
            .map_err(|e| RouteError::InvalidInput(format!("Waypoint at index {}: {}", idx, e)))?;
    }
    Ok(())
}

/// Validates the radius of the sphere distances are measured on.
///
/// ```
/// use route_analyzer::compute::validation::validate_earth_radius;
///
/// assert!(validate_earth_radius(6371.0).is_ok());
/// assert!(validate_earth_radius(0.0).is_err());
/// assert!(validate_earth_radius(f64::NAN).is_err());
/// ```
pub fn validate_earth_radius(earth_radius_km: f64) -> Result<()> {
    if !earth_radius_km.is_finite() || earth_radius_km <= 0.0 {
        return Err(RouteError::InvalidEarthRadius(earth_radius_km));
    }
    Ok(())
}

/// Validates a geofence radius. Zero is allowed: only the center itself is inside.
pub fn validate_geofence_radius(radius_km: f64) -> Result<()> {
    if !radius_km.is_finite() {
        return Err(RouteError::InvalidInput(format!(
            "Geofence radius must be finite, got: {}",
            radius_km
        )));
    }
    if radius_km < 0.0 {
        return Err(RouteError::InvalidInput(format!(
            "Geofence radius must not be negative, got: {}",
            radius_km
        )));
    }
    Ok(())
}

/// Validates an explicit hotspot radius.
pub fn validate_hotspot_radius(radius_km: f64) -> Result<()> {
    if !radius_km.is_finite() {
        return Err(RouteError::InvalidInput(format!(
            "Hotspot radius must be finite, got: {}",
            radius_km
        )));
    }
    if radius_km <= 0.0 {
        return Err(RouteError::InvalidInput(format!(
            "Hotspot radius must be positive, got: {}",
            radius_km
        )));
    }
    Ok(())
}
