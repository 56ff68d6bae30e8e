//! Hotspot detection by spatial binning.
//!
//! Every waypoint is binned into a cell of a [`SpatialIndex`] at a fixed
//! resolution; the cell holding the most waypoints is the hotspot.
//!
//! When several cells share the maximum count, the cell whose first waypoint
//! appears earliest in the track wins. This keeps results stable across runs
//! and independent of hash map iteration order.

use crate::error::{Result, RouteError};
use crate::index::SpatialIndex;
use route_types::analysis::{CellId, HotspotResult};
use route_types::waypoint::Waypoint;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy)]
struct CellTally {
    count: usize,
    first_seen: usize,
}

/// Find the most populated cell at `resolution` and collect its members.
///
/// Members keep their original track order and `members.len() == cell_count`.
///
/// # Errors
///
/// - [`RouteError::EmptyTrack`] for an empty track
/// - [`RouteError::InvalidResolution`] when the index does not support `resolution`
/// - any error the index reports for a waypoint
///
/// # Examples
///
/// ```
/// use route_analyzer::compute::spatial::detect_hotspot;
/// use route_analyzer::index::H3Index;
/// use route_analyzer::Waypoint;
///
/// let track = vec![
///     Waypoint::new(1.0, 37.7749, -122.4194),
///     Waypoint::new(2.0, 37.7750, -122.4195),
///     Waypoint::new(3.0, 40.7128, -74.0060),
/// ];
///
/// let hotspot = detect_hotspot(&H3Index, &track, 8)?;
/// assert_eq!(hotspot.cell_count, 2);
/// # Ok::<(), route_analyzer::RouteError>(())
/// ```
pub fn detect_hotspot<I>(index: &I, track: &[Waypoint], resolution: u8) -> Result<HotspotResult>
where
    I: SpatialIndex + ?Sized,
{
    if track.is_empty() {
        return Err(RouteError::EmptyTrack);
    }
    if !index.supports(resolution) {
        return Err(RouteError::InvalidResolution(resolution));
    }

    let cells = track
        .iter()
        .map(|wp| index.cell_id(wp.latitude(), wp.longitude(), resolution))
        .collect::<Result<Vec<CellId>>>()?;

    let mut tallies: FxHashMap<CellId, CellTally> = FxHashMap::default();
    for (position, cell) in cells.iter().enumerate() {
        tallies
            .entry(*cell)
            .or_insert(CellTally {
                count: 0,
                first_seen: position,
            })
            .count += 1;
    }

    let (winner, tally) = tallies
        .iter()
        .max_by(|(_, a), (_, b)| {
            a.count
                .cmp(&b.count)
                .then_with(|| b.first_seen.cmp(&a.first_seen))
        })
        .map(|(cell, tally)| (*cell, *tally))
        .ok_or(RouteError::EmptyTrack)?;

    log::debug!(
        "hotspot: {} occupied cells at resolution {}, winner {} holds {}",
        tallies.len(),
        resolution,
        winner,
        tally.count
    );

    let members: Vec<Waypoint> = track
        .iter()
        .zip(&cells)
        .filter(|(_, cell)| **cell == winner)
        .map(|(wp, _)| *wp)
        .collect();

    Ok(HotspotResult {
        cell: winner,
        cell_count: members.len(),
        members,
    })
}
