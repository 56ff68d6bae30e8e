//! Reader for semicolon-delimited `timestamp;latitude;longitude` tracks.
//!
//! Records that are incomplete, unparsable or out of geographic range are
//! skipped, so the core always receives a clean track. There is no header
//! row; a header line simply fails to parse and is skipped like any other
//! malformed record.

use crate::compute::validation::validate_waypoint;
use crate::error::Result;
use csv::{ReaderBuilder, StringRecord, Trim};
use route_types::waypoint::Waypoint;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a track from any reader.
///
/// # Examples
///
/// ```
/// use route_analyzer::io::read_track;
///
/// let data = "1.0;37.7749;-122.4194\nnot;a;record\n2.0;34.0522;-118.2437\n";
/// let track = read_track(data.as_bytes())?;
/// assert_eq!(track.len(), 2);
/// # Ok::<(), route_analyzer::RouteError>(())
/// ```
pub fn read_track<R: Read>(reader: R) -> Result<Vec<Waypoint>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut track = Vec::new();
    let mut skipped = 0usize;

    for (line, record) in rdr.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::debug!("skipping record {}: {}", line + 1, e);
                skipped += 1;
                continue;
            }
        };

        match parse_waypoint(&record) {
            Some(waypoint) => track.push(waypoint),
            None => {
                log::debug!("skipping malformed record {}: {:?}", line + 1, record);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!(
            "skipped {} malformed record(s), kept {} waypoint(s)",
            skipped,
            track.len()
        );
    }

    Ok(track)
}

/// Load a track from a file.
pub fn load_track(path: impl AsRef<Path>) -> Result<Vec<Waypoint>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let track = read_track(file)?;
    log::debug!("loaded {} waypoints from {}", track.len(), path.display());
    Ok(track)
}

fn parse_waypoint(record: &StringRecord) -> Option<Waypoint> {
    if record.len() < 3 {
        return None;
    }

    let field = |i: usize| record.get(i).and_then(|s| s.parse::<f64>().ok());
    let waypoint = Waypoint::new(field(0)?, field(1)?, field(2)?);

    validate_waypoint(&waypoint).ok().map(|_| waypoint)
}
