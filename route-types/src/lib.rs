//! # route-types
//!
//! Data types shared by the route-analyzer pipeline.
//!
//! - **Track types**: [`Waypoint`](waypoint::Waypoint), [`Track`](waypoint::Track)
//! - **Analysis results**: [`FarthestResult`](analysis::FarthestResult),
//!   [`HotspotResult`](analysis::HotspotResult), [`GeofenceResult`](analysis::GeofenceResult),
//!   [`AnalysisReport`](analysis::AnalysisReport)
//! - **Output document**: [`Output`](output::Output), the serialized shape of a report,
//!   built with `Output::try_from(&report)`
//!
//! All types are serializable with Serde and convert into the `geo` crate's
//! primitives where that makes sense.
//!
//! ## Examples
//!
//! ```rust
//! use route_types::waypoint::Waypoint;
//!
//! let nyc = Waypoint::new(1.0, 40.7128, -74.0060);
//! let point: geo::Point = nyc.into();
//! assert_eq!(point.x(), -74.0060);
//! assert_eq!(point.y(), 40.7128);
//! ```

pub mod analysis;
pub mod output;
pub mod waypoint;
