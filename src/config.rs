//! Analysis parameters and their loaders.
//!
//! Parameters come from a small key-value document: YAML, JSON or TOML. Parsing is
//! schema-driven: a missing or wrongly typed key fails with a descriptive
//! error at load time instead of deep inside the pipeline.
use crate::compute::validation::{
    validate_coordinate, validate_earth_radius, validate_geofence_radius, validate_hotspot_radius,
};
use crate::error::{Result, RouteError};
use route_types::waypoint::Waypoint;
use std::path::Path;

/// Parameters of one analysis run.
///
/// ```
/// use route_analyzer::AnalysisParameters;
///
/// let params = AnalysisParameters::from_json(r#"{
///     "earthRadiusKm": 6371.0,
///     "geofenceCenterLatitude": 37.7749,
///     "geofenceCenterLongitude": -122.4194,
///     "geofenceRadiusKm": 50.0
/// }"#)?;
/// assert!(params.most_frequented_area_radius_km.is_none());
/// # Ok::<(), route_analyzer::RouteError>(())
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalysisParameters {
    pub earth_radius_km: f64,

    pub geofence_center_latitude: f64,

    pub geofence_center_longitude: f64,

    pub geofence_radius_km: f64,

    /// Hotspot radius; derived from the track extent when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_frequented_area_radius_km: Option<f64>,
}

impl AnalysisParameters {
    pub fn new(
        earth_radius_km: f64,
        geofence_center_latitude: f64,
        geofence_center_longitude: f64,
        geofence_radius_km: f64,
    ) -> Self {
        Self {
            earth_radius_km,
            geofence_center_latitude,
            geofence_center_longitude,
            geofence_radius_km,
            most_frequented_area_radius_km: None,
        }
    }

    pub fn with_hotspot_radius(mut self, radius_km: f64) -> Self {
        self.most_frequented_area_radius_km = Some(radius_km);
        self
    }

    /// The geofence center as a location waypoint (timestamp `0.0`).
    pub fn geofence_center(&self) -> Waypoint {
        Waypoint::location(self.geofence_center_latitude, self.geofence_center_longitude)
    }

    pub fn validate(&self) -> Result<()> {
        validate_earth_radius(self.earth_radius_km)?;
        validate_coordinate(self.geofence_center_latitude, self.geofence_center_longitude)
            .map_err(|e| RouteError::InvalidInput(format!("Geofence center: {}", e)))?;
        validate_geofence_radius(self.geofence_radius_km)?;
        if let Some(radius) = self.most_frequented_area_radius_km {
            validate_hotspot_radius(radius)?;
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let params: AnalysisParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let params: AnalysisParameters = toml::from_str(toml_str)?;
        params.validate()?;
        Ok(params)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let params: AnalysisParameters = serde_yaml::from_str(yaml)?;
        params.validate()?;
        Ok(params)
    }

    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load parameters from a `.yml`/`.yaml`, `.json` or `.toml` file.
    ///
    /// Returns `Ok(None)` when the file does not exist, leaving the decision
    /// of what a missing parameter set means to the caller.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("Parameter file not found: {}", path.display());
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let params = match extension.as_deref() {
            #[cfg(feature = "yaml")]
            Some("yml" | "yaml") => Self::from_yaml(&contents)?,
            Some("json") => Self::from_json(&contents)?,
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml(&contents)?,
            other => {
                return Err(RouteError::InvalidFormat(format!(
                    "Unsupported parameter file extension {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                )));
            }
        };

        log::debug!("Loaded parameters from {}: {:?}", path.display(), params);
        Ok(Some(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn sf_params() -> AnalysisParameters {
        AnalysisParameters::new(6371.0, 37.7749, -122.4194, 50.0).with_hotspot_radius(10.0)
    }

    #[test]
    fn test_params_json_roundtrip() {
        let params = sf_params();
        let json = params.to_json().unwrap();
        assert!(json.contains("\"earthRadiusKm\""));
        assert!(json.contains("\"mostFrequentedAreaRadiusKm\""));

        let back = AnalysisParameters::from_json(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_optional_radius_omitted() {
        let params = AnalysisParameters::new(6371.0, 37.7749, -122.4194, 50.0);
        let json = params.to_json().unwrap();
        assert!(!json.contains("mostFrequentedAreaRadiusKm"));
    }

    #[test]
    fn test_missing_required_key() {
        let err = AnalysisParameters::from_json(
            r#"{"earthRadiusKm": 6371.0, "geofenceCenterLatitude": 1.0, "geofenceRadiusKm": 5.0}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RouteError::Serialization(_)));
        assert!(err.to_string().contains("geofenceCenterLongitude"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = AnalysisParameters::from_json(
            r#"{"earthRadiusKm": "big", "geofenceCenterLatitude": 1.0,
                "geofenceCenterLongitude": 1.0, "geofenceRadiusKm": 5.0}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RouteError::Serialization(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = AnalysisParameters::from_json(
            r#"{"earthRadiusKm": 6371.0, "geofenceCenterLatitude": 1.0,
                "geofenceCenterLongitude": 1.0, "geofenceRadiusKm": 5.0, "colour": 3}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validation() {
        assert!(sf_params().validate().is_ok());

        let mut bad = sf_params();
        bad.earth_radius_km = 0.0;
        assert!(matches!(bad.validate(), Err(RouteError::InvalidEarthRadius(_))));

        let mut bad = sf_params();
        bad.geofence_center_latitude = 100.0;
        assert!(bad.validate().is_err());

        let mut bad = sf_params();
        bad.geofence_radius_km = -1.0;
        assert!(bad.validate().is_err());

        let bad = sf_params().with_hotspot_radius(0.0);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_geofence_center() {
        let center = sf_params().geofence_center();
        assert_eq!(center.latitude(), 37.7749);
        assert_eq!(center.longitude(), -122.4194);
        assert_eq!(center.timestamp(), 0.0);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_params_toml() {
        let params = AnalysisParameters::from_toml(
            r#"
            earthRadiusKm = 6371.0
            geofenceCenterLatitude = 37.7749
            geofenceCenterLongitude = -122.4194
            geofenceRadiusKm = 50.0
            mostFrequentedAreaRadiusKm = 10.0
            "#,
        )
        .unwrap();
        assert_eq!(params, sf_params());

        let rendered = params.to_toml().unwrap();
        assert_eq!(AnalysisParameters::from_toml(&rendered).unwrap(), params);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(sf_params().to_json().unwrap().as_bytes())
            .unwrap();

        let params = AnalysisParameters::load(file.path()).unwrap();
        assert_eq!(params, Some(sf_params()));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_load_yaml_file() {
        for suffix in [".yml", ".yaml"] {
            let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
            file.write_all(
                b"earthRadiusKm: 6371.0\n\
                  geofenceCenterLatitude: 37.7749\n\
                  geofenceCenterLongitude: -122.4194\n\
                  geofenceRadiusKm: 50.0\n\
                  mostFrequentedAreaRadiusKm: 10.0\n",
            )
            .unwrap();

            let params = AnalysisParameters::load(file.path()).unwrap();
            assert_eq!(params, Some(sf_params()), "suffix {}", suffix);
        }
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_params_yaml() {
        let params = AnalysisParameters::from_yaml(
            "earthRadiusKm: 6371\n\
             geofenceCenterLatitude: 37.7749\n\
             geofenceCenterLongitude: -122.4194\n\
             geofenceRadiusKm: 50\n",
        )
        .unwrap();
        assert_eq!(params.earth_radius_km, 6371.0);
        assert!(params.most_frequented_area_radius_km.is_none());

        let rendered = params.to_yaml().unwrap();
        assert_eq!(AnalysisParameters::from_yaml(&rendered).unwrap(), params);

        let err = AnalysisParameters::from_yaml("earthRadiusKm: 6371.0\n").unwrap_err();
        assert!(matches!(err, RouteError::Serialization(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let params = AnalysisParameters::load(dir.path().join("absent.toml")).unwrap();
        assert!(params.is_none());
    }

    #[test]
    fn test_load_unknown_extension() {
        let mut file = Builder::new().suffix(".ini").tempfile().unwrap();
        file.write_all(b"earthRadiusKm=6371").unwrap();

        let result = AnalysisParameters::load(file.path());
        assert!(matches!(result, Err(RouteError::InvalidFormat(_))));
    }
}
