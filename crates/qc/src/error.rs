//! Error types for the etofuse-qc crate.

/// Error type for all fallible operations in the etofuse-qc crate.
///
/// Data-quality findings never land here; they are warnings. Only malformed
/// input fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QcError {
    /// Returned for a non-finite latitude or one outside [-90, 90].
    #[error("invalid latitude {latitude}")]
    InvalidLatitude {
        /// The offending latitude, degrees.
        latitude: f64,
    },
}
