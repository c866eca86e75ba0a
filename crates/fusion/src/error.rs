//! Error types for the etofuse-fusion crate.

/// Error type for all fallible operations in the etofuse-fusion crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FusionError {
    /// Returned only when the whole run has zero usable measurements.
    /// Partial day or variable coverage is not an error.
    #[error("no usable measurements in the fusion run")]
    NoDataToFuse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message() {
        assert_eq!(
            FusionError::NoDataToFuse.to_string(),
            "no usable measurements in the fusion run"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<FusionError>();
    }
}
