//! GPS track analytics: the farthest point from the start, the H3 hotspot, and
//! the waypoints that leave a circular geofence.
//!
//! ```rust
//! use route_analyzer::{AnalysisParameters, Waypoint, analyze};
//!
//! let track = vec![
//!     Waypoint::new(1.0, 37.7749, -122.4194), // San Francisco
//!     Waypoint::new(2.0, 34.0522, -118.2437), // Los Angeles
//!     Waypoint::new(3.0, 40.7128, -74.0060),  // New York
//! ];
//! let params = AnalysisParameters::new(6371.0, 37.7749, -122.4194, 50.0)
//!     .with_hotspot_radius(10.0);
//!
//! let report = analyze(&track, Some(&params))?;
//! assert_eq!(report.farthest.waypoint, track[2]);
//! assert_eq!(report.resolution, 8);
//! assert_eq!(report.geofence.outside, vec![track[1], track[2]]);
//! # Ok::<(), route_analyzer::RouteError>(())
//! ```

pub mod analyzer;
pub mod compute;
pub mod config;
pub mod error;
pub mod index;
pub mod io;

pub use analyzer::{Analyzer, analyze};
pub use config::AnalysisParameters;
pub use error::{Result, RouteError};
pub use index::{H3Index, SpatialIndex};

pub use route_types::analysis::{
    AnalysisReport, CellId, FarthestResult, GeofenceResult, HotspotResult,
};
pub use route_types::output::Output;
pub use route_types::waypoint::{Track, Waypoint};

pub use compute::spatial::{
    detect_hotspot, distance_between, farthest_from_start, haversine_km, outside_geofence,
    resolution_for_radius,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{AnalysisParameters, Analyzer, Result, RouteError, analyze};

    pub use crate::{AnalysisReport, Track, Waypoint};

    pub use crate::{H3Index, SpatialIndex};

    pub use crate::io::{load_track, write_report};
}
