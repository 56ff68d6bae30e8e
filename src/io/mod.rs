//! Format adapters around the analysis core: the track reader and the
//! report writer. The core itself never touches the filesystem.

pub mod report;
pub mod track;

pub use report::{to_json_pretty, write_report};
pub use track::{load_track, read_track};
