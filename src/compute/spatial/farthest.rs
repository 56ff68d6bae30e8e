//! Farthest waypoint from the start of a track.

use crate::compute::spatial::distance::distance_between;
use crate::compute::validation::validate_earth_radius;
use crate::error::{Result, RouteError};
use route_types::analysis::FarthestResult;
use route_types::waypoint::Waypoint;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scan the track for the waypoint farthest from `track[0]`.
///
/// The start itself takes part at distance `0.0`, so a single-point track
/// returns that point. Ties go to the first waypoint reaching the maximum.
///
/// # Errors
///
/// [`RouteError::EmptyTrack`] for an empty track, and
/// [`RouteError::InvalidEarthRadius`] for a non-positive sphere radius.
///
/// # Examples
///
/// ```
/// use route_analyzer::compute::spatial::farthest_from_start;
/// use route_analyzer::Waypoint;
///
/// let track = vec![
///     Waypoint::new(1.0, 37.7749, -122.4194), // San Francisco
///     Waypoint::new(2.0, 34.0522, -118.2437), // Los Angeles
///     Waypoint::new(3.0, 40.7128, -74.0060),  // New York
/// ];
///
/// let farthest = farthest_from_start(&track, 6371.0)?;
/// assert_eq!(farthest.waypoint, track[2]);
/// assert!(farthest.distance_km > 2000.0);
/// # Ok::<(), route_analyzer::RouteError>(())
/// ```
pub fn farthest_from_start(track: &[Waypoint], earth_radius_km: f64) -> Result<FarthestResult> {
    let start = track.first().ok_or(RouteError::EmptyTrack)?;
    validate_earth_radius(earth_radius_km)?;

    #[cfg(feature = "parallel")]
    let (index, distance_km) = track
        .par_iter()
        .enumerate()
        .map(|(i, wp)| distance_between(start, wp, earth_radius_km).map(|d| (i, d)))
        .try_reduce(|| (0, 0.0), |a, b| Ok(farther(a, b)))?;

    #[cfg(not(feature = "parallel"))]
    let (index, distance_km) = {
        let mut best = (0, 0.0);
        for (i, wp) in track.iter().enumerate() {
            best = farther(best, (i, distance_between(start, wp, earth_radius_km)?));
        }
        best
    };

    Ok(FarthestResult {
        waypoint: track[index],
        distance_km,
    })
}

/// Associative max over `(index, distance)` that prefers the lower index on ties.
#[inline]
fn farther(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
        b
    } else {
        a
    }
}
