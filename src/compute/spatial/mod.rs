pub mod distance;
pub use distance::{distance_between, haversine_km};

pub mod farthest;
pub use farthest::farthest_from_start;

pub mod geofence;
pub use geofence::outside_geofence;

pub mod hotspot;
pub use hotspot::detect_hotspot;

pub mod resolution;
pub use resolution::{FINEST_RESOLUTION, MIN_RADIUS_KM, resolution_for_radius};
