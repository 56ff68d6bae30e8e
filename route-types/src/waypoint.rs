use geo::Point;
use serde::{Deserialize, Serialize};

/// A single timestamped GPS sample.
///
/// Waypoints are immutable once built. The timestamp is carried through the
/// pipeline untouched; tracks are analysed in collection order, never sorted
/// by time.
///
/// # Examples
///
/// ```
/// use route_types::waypoint::Waypoint;
///
/// let sf = Waypoint::new(1.0, 37.7749, -122.4194);
/// assert_eq!(sf.latitude(), 37.7749);
/// assert_eq!(sf.longitude(), -122.4194);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    timestamp: f64,
    latitude: f64,
    longitude: f64,
}

impl Waypoint {
    /// Create a waypoint from a timestamp and latitude/longitude in degrees.
    #[inline]
    pub const fn new(timestamp: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
        }
    }

    /// A waypoint with no meaningful timestamp, used for fixed locations such
    /// as a geofence center.
    #[inline]
    pub const fn location(latitude: f64, longitude: f64) -> Self {
        Self::new(0.0, latitude, longitude)
    }

    #[inline]
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The position as a `geo::Point` (x = longitude, y = latitude).
    #[inline]
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<Waypoint> for Point<f64> {
    fn from(waypoint: Waypoint) -> Self {
        waypoint.point()
    }
}

impl From<&Waypoint> for Point<f64> {
    fn from(waypoint: &Waypoint) -> Self {
        waypoint.point()
    }
}

/// An ordered journey; order reflects collection order.
pub type Track = Vec<Waypoint>;
