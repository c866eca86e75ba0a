//! The consumed interfaces, injected by the caller.

use chrono::NaiveDate;

use etofuse_fusion::FusionReference;
use etofuse_geo::GeoPoint;
use etofuse_series::DailyObservation;
use etofuse_sources::ProviderId;

/// Delivers one provider's raw observations for a location and range.
///
/// Implementations do the network work (concurrently, outside the core) and
/// the provider-native-to-[`etofuse_series::Variable`] name mapping plus
/// unit conversion. A failing or partial provider simply yields fewer
/// observations; provider errors never cross this boundary.
pub trait ProviderAdapter {
    fn fetch(
        &self,
        provider: ProviderId,
        point: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<DailyObservation>;
}

/// Looks up the climate-normal reference nearest to a location.
///
/// Returns `None` when no reference lies within `max_distance_km`; the
/// fuser then runs in simple mode.
pub trait ReferenceStore {
    fn lookup(&self, point: GeoPoint, max_distance_km: f64) -> Option<FusionReference>;
}

/// Resolves site elevation in metres.
///
/// `None` makes the pipeline fall back to sea level with an accuracy
/// warning.
pub trait ElevationService {
    fn lookup(&self, point: GeoPoint) -> Option<f64>;
}
