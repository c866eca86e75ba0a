//! The request type.

use chrono::NaiveDate;
use serde::Deserialize;

use etofuse_geo::GeoPoint;
use etofuse_request::OperationMode;
use etofuse_sources::ProviderId;

/// One ETo computation request.
///
/// `today` is explicit so requests replay identically; services set it from
/// their clock at the boundary, tests pin it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EtoRequest {
    /// Site location; deserialization already enforces coordinate validity.
    pub point: GeoPoint,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub today: NaiveDate,
    /// Optional mode hint; without one the mode is inferred from the range.
    #[serde(default)]
    pub mode_hint: Option<OperationMode>,
    /// Optional provider preference, validated before automatic ranking.
    #[serde(default)]
    pub preferred_provider: Option<ProviderId>,
}
