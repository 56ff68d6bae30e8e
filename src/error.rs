//! Error type shared by the analysis pipeline and its loaders.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no valid waypoints in track")]
    EmptyTrack,

    #[error("analysis parameters are missing")]
    MissingParameters,

    #[error("radius too small for any H3 resolution: {0} km")]
    InvalidRadius(f64),

    #[error("earth radius must be finite and positive, got: {0} km")]
    InvalidEarthRadius(f64),

    #[error("unsupported resolution: {0}")]
    InvalidResolution(u8),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid report: {0}")]
    InvalidReport(#[from] route_types::output::EmptyHotspot),
}

impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for RouteError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(feature = "toml")]
impl From<toml::ser::Error> for RouteError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for RouteError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
