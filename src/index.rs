//! Hierarchical spatial indexing used to bin waypoints into cells.
//!
//! The hotspot detector only needs a pure `(lat, lon, resolution) -> cell`
//! mapping, so the partitioning scheme sits behind the [`SpatialIndex`] trait.
//! [`H3Index`] is the default, backed by the `h3o` implementation of Uber's
//! hexagonal H3 grid.

use crate::error::{Result, RouteError};
use h3o::{LatLng, Resolution};
use route_types::analysis::CellId;

/// Maps a coordinate to the identifier of the cell containing it.
pub trait SpatialIndex {
    /// Cell containing `(latitude, longitude)` at `resolution`.
    fn cell_id(&self, latitude: f64, longitude: f64, resolution: u8) -> Result<CellId>;

    /// Finest resolution this index supports; `0` is always the coarsest.
    fn max_resolution(&self) -> u8;

    fn supports(&self, resolution: u8) -> bool {
        resolution <= self.max_resolution()
    }
}

impl<T: SpatialIndex + ?Sized> SpatialIndex for &T {
    fn cell_id(&self, latitude: f64, longitude: f64, resolution: u8) -> Result<CellId> {
        (**self).cell_id(latitude, longitude, resolution)
    }

    fn max_resolution(&self) -> u8 {
        (**self).max_resolution()
    }
}

/// Uber H3 hexagonal grid, resolutions 0 (continental) through 15 (sub-metre).
///
/// # Examples
///
/// ```
/// use route_analyzer::index::{H3Index, SpatialIndex};
///
/// let h3 = H3Index;
/// let a = h3.cell_id(37.7749, -122.4194, 8)?;
/// let b = h3.cell_id(37.7750, -122.4195, 8)?;
/// assert_eq!(a, b);
/// # Ok::<(), route_analyzer::RouteError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct H3Index;

impl SpatialIndex for H3Index {
    fn cell_id(&self, latitude: f64, longitude: f64, resolution: u8) -> Result<CellId> {
        let resolution =
            Resolution::try_from(resolution).map_err(|_| RouteError::InvalidResolution(resolution))?;
        let latlng = LatLng::new(latitude, longitude).map_err(|e| {
            RouteError::InvalidInput(format!(
                "Cannot index ({}, {}): {}",
                latitude, longitude, e
            ))
        })?;

        Ok(CellId::new(u64::from(latlng.to_cell(resolution))))
    }

    fn max_resolution(&self) -> u8 {
        u8::from(Resolution::Fifteen)
    }
}
