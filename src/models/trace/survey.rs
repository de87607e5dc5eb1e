use serde::{Deserialize, Serialize};

use crate::support::geo::{Coordinates, Elevation, GeoError};

/// A raw surveyed position as delivered by an upstream parser or
/// elevation service.
///
/// Values are unchecked until [`SurveyPoint::validate`] runs, which
/// [`Trace::from_survey`](super::Trace::from_survey) does for every point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_meters: f64,
}

impl SurveyPoint {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, elevation_meters: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation_meters,
        }
    }

    /// Converts the raw values into validated geographic types.
    ///
    /// # Errors
    ///
    /// Returns a [`GeoError`] naming the first out-of-range component.
    pub fn validate(&self) -> Result<(Coordinates, Elevation), GeoError> {
        let coordinates = Coordinates::new(self.latitude, self.longitude)?;
        let elevation = Elevation::new(self.elevation_meters)?;
        Ok((coordinates, elevation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{"latitude": -38.233023, "longitude": -68.629742, "elevationMeters": 545}"#;
        let point: SurveyPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point, SurveyPoint::new(-38.233023, -68.629742, 545.0));
    }

    #[test]
    fn validate_reports_bad_component() {
        assert!(SurveyPoint::new(10.0, 20.0, 30.0).validate().is_ok());
        assert!(matches!(
            SurveyPoint::new(10.0, 20.0, 9500.0).validate(),
            Err(GeoError::Elevation { value, .. }) if value == 9500.0
        ));
        assert!(matches!(
            SurveyPoint::new(95.0, 20.0, 30.0).validate(),
            Err(GeoError::Latitude { .. })
        ));
    }
}
