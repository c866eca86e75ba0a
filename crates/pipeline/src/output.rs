//! The serializable run output.

use serde::Serialize;

use etofuse_eto::EToRecord;
use etofuse_fusion::FusionResult;
use etofuse_geo::Region;
use etofuse_request::OperationMode;
use etofuse_sources::{AvailabilityReport, ProviderId};

/// Everything one pipeline run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EtoResponse {
    pub region: Region,
    pub mode: OperationMode,
    /// Eligible providers in the order their measurements were applied.
    pub providers: Vec<ProviderId>,
    /// Full availability decision, rejections included.
    pub availability: AvailabilityReport,
    /// Elevation the calculation used, metres.
    pub elevation_m: f64,
    /// Per-variable, per-day fused estimates with provenance.
    pub fusion: Vec<FusionResult>,
    /// One record per requested day, gaps included.
    pub records: Vec<EToRecord>,
    /// Accumulated data-quality findings from every stage.
    pub warnings: Vec<String>,
}
