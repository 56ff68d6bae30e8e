//! Radius to H3 resolution heuristic.

use crate::error::{Result, RouteError};

/// Finest resolution the table maps to.
pub const FINEST_RESOLUTION: u8 = 15;

/// Smallest radius any resolution is chosen for, in km.
pub const MIN_RADIUS_KM: f64 = 0.004;

/// Minimum radius (km) for each resolution, coarsest first.
///
/// Thresholds roughly track the edge length of H3 cells at each level.
const RESOLUTION_THRESHOLDS: [(f64, u8); 16] = [
    (11070.0, 0),
    (4184.0, 1),
    (1582.0, 2),
    (597.5, 3),
    (224.2, 4),
    (84.21, 5),
    (31.5, 6),
    (11.8, 7),
    (4.4, 8),
    (1.65, 9),
    (0.62, 10),
    (0.23, 11),
    (0.087, 12),
    (0.033, 13),
    (0.012, 14),
    (MIN_RADIUS_KM, FINEST_RESOLUTION),
];

/// Pick the coarsest resolution whose threshold does not exceed `radius_km`.
///
/// Bracket lower bounds are inclusive.
///
/// # Errors
///
/// [`RouteError::InvalidRadius`] when the radius is below [`MIN_RADIUS_KM`]
/// or is NaN. Tiny radii are rejected rather than clamped to the finest level.
///
/// # Examples
///
/// ```
/// use route_analyzer::compute::spatial::resolution_for_radius;
///
/// assert_eq!(resolution_for_radius(1.7)?, 9);
/// assert_eq!(resolution_for_radius(85.0)?, 5);
/// assert!(resolution_for_radius(0.001).is_err());
/// # Ok::<(), route_analyzer::RouteError>(())
/// ```
pub fn resolution_for_radius(radius_km: f64) -> Result<u8> {
    RESOLUTION_THRESHOLDS
        .iter()
        .find(|(threshold, _)| radius_km >= *threshold)
        .map(|&(_, resolution)| resolution)
        .ok_or(RouteError::InvalidRadius(radius_km))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_radii() {
        assert_eq!(resolution_for_radius(1.7).unwrap(), 9);
        assert_eq!(resolution_for_radius(85.0).unwrap(), 5);
        assert_eq!(resolution_for_radius(10.0).unwrap(), 8);
        assert_eq!(resolution_for_radius(0.1).unwrap(), 12);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(resolution_for_radius(11070.0).unwrap(), 0);
        assert_eq!(resolution_for_radius(0.004).unwrap(), 15);
        for &(threshold, resolution) in RESOLUTION_THRESHOLDS.iter() {
            assert_eq!(resolution_for_radius(threshold).unwrap(), resolution);
        }
    }

    #[test]
    fn test_just_below_threshold_is_finer() {
        assert_eq!(resolution_for_radius(11069.9).unwrap(), 1);
        assert_eq!(resolution_for_radius(1.649).unwrap(), 10);
    }

    #[test]
    fn test_huge_radius_is_coarsest() {
        assert_eq!(resolution_for_radius(40_000.0).unwrap(), 0);
        assert_eq!(resolution_for_radius(f64::INFINITY).unwrap(), 0);
    }

    #[test]
    fn test_small_radius_still_valid() {
        assert_eq!(resolution_for_radius(0.005).unwrap(), 15);
    }

    #[test]
    fn test_too_small_radius() {
        let err = resolution_for_radius(0.001).unwrap_err();
        assert!(matches!(err, RouteError::InvalidRadius(r) if r == 0.001));
        assert!(err.to_string().contains("radius too small"));

        assert!(resolution_for_radius(0.0).is_err());
        assert!(resolution_for_radius(-5.0).is_err());
        assert!(resolution_for_radius(f64::NAN).is_err());
    }

    #[test]
    fn test_monotonic() {
        let mut previous = 0;
        for &(threshold, resolution) in RESOLUTION_THRESHOLDS.iter() {
            assert!(resolution >= previous);
            assert!(threshold > 0.0);
            previous = resolution;
        }
    }
}
