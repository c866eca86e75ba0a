//! Error types for the etofuse-geo crate.

/// Error type for all fallible operations in the etofuse-geo crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// Returned when a latitude or longitude is outside the valid range.
    #[error("invalid coordinate ({lat}, {lon}): latitude must be in [-90, 90], longitude in [-180, 180]")]
    InvalidCoordinate {
        /// The offending latitude.
        lat: f64,
        /// The offending longitude.
        lon: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_coordinate_display() {
        let e = GeoError::InvalidCoordinate {
            lat: 91.0,
            lon: 0.0,
        };
        assert_eq!(
            e.to_string(),
            "invalid coordinate (91, 0): latitude must be in [-90, 90], longitude in [-180, 180]"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<GeoError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<GeoError>();
    }
}
