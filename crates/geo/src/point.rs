//! Validated geographic coordinate.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// A geographic coordinate in decimal degrees.
///
/// Construction enforces −90 ≤ lat ≤ 90 and −180 ≤ lon ≤ 180, so every
/// `GeoPoint` handed to the rest of the pipeline is valid by definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidCoordinate`] if either component is
    /// non-finite or outside its valid range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lon.is_finite() || !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in radians, as needed by the solar geometry equations.
    pub fn lat_radians(&self) -> f64 {
        self.lat.to_radians()
    }
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            lat: f64,
            lon: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        GeoPoint::new(raw.lat, raw.lon).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_point() {
        let p = GeoPoint::new(-15.7939, -47.8828).unwrap();
        assert_eq!(p.lat(), -15.7939);
        assert_eq!(p.lon(), -47.8828);
    }

    #[test]
    fn poles_and_antimeridian_are_valid() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn latitude_out_of_range() {
        let err = GeoPoint::new(90.1, 0.0).unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinate { .. }));
    }

    #[test]
    fn longitude_out_of_range() {
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(0.0, 181.0).is_err());
    }

    #[test]
    fn non_finite_rejected() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn deserialize_rejects_invalid() {
        let ok: GeoPoint = serde_json::from_str(r#"{"lat": 10.0, "lon": 20.0}"#).unwrap();
        assert_eq!(ok.lat(), 10.0);
        let bad = serde_json::from_str::<GeoPoint>(r#"{"lat": 95.0, "lon": 20.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn display_rounds_to_four_places() {
        let p = GeoPoint::new(59.91390001, 10.7522).unwrap();
        assert_eq!(p.to_string(), "(59.9139, 10.7522)");
    }
}
