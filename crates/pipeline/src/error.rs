//! Aggregated error type for a pipeline run.

use etofuse_eto::EtoError;
use etofuse_fusion::FusionError;
use etofuse_geo::GeoError;
use etofuse_qc::QcError;
use etofuse_request::RequestError;
use etofuse_series::SeriesError;
use etofuse_sources::AvailabilityError;

/// Error type for all fallible operations in the etofuse-pipeline crate.
///
/// Everything here is a hard failure; data-quality findings travel as
/// warnings inside the response instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Availability(#[from] AvailabilityError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Qc(#[from] QcError),

    #[error(transparent)]
    Fusion(#[from] FusionError),

    #[error(transparent)]
    Eto(#[from] EtoError),
}
