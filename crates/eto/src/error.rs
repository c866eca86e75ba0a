//! Error types for the etofuse-eto crate.

use etofuse_series::Variable;

/// Error type for all fallible operations in the etofuse-eto crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EtoError {
    /// Returned for a non-finite latitude or one outside [-90, 90].
    #[error("invalid latitude {latitude}")]
    InvalidLatitude {
        /// The offending latitude, degrees.
        latitude: f64,
    },

    /// Returned when the fused input map has no series at all.
    #[error("no fused series to compute from")]
    EmptyInput,

    /// Returned when one variable's series covers a different date range
    /// than the others.
    #[error("series for {variable} covers a different date range than the batch")]
    RangeMismatch {
        /// The misaligned variable.
        variable: Variable,
    },
}
