//! Error types for the etofuse-sources crate.

use chrono::NaiveDate;

use etofuse_geo::Region;
use etofuse_request::OperationMode;

use crate::availability::ProviderRejection;

/// Error type for all fallible operations in the etofuse-sources crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AvailabilityError {
    /// Returned when no provider's coverage and window contain the request.
    #[error(
        "no provider available for {region} in {mode} over [{start}, {end}]: {}",
        rejections
            .iter()
            .map(|r| format!("{}: {}", r.provider, r.reason))
            .collect::<Vec<_>>()
            .join("; ")
    )]
    NoProviderAvailable {
        region: Region,
        mode: OperationMode,
        start: NaiveDate,
        end: NaiveDate,
        /// One rejection per catalog provider.
        rejections: Vec<ProviderRejection>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderId;

    #[test]
    fn no_provider_display_lists_every_rejection() {
        let e = AvailabilityError::NoProviderAvailable {
            region: Region::Nordic,
            mode: OperationMode::DashboardForecast,
            start: "2024-05-20".parse().unwrap(),
            end: "2024-05-25".parse().unwrap(),
            rejections: vec![
                ProviderRejection {
                    provider: ProviderId::NasaPower,
                    reason: "not offered in dashboard_forecast".into(),
                },
                ProviderRejection {
                    provider: ProviderId::NwsForecast,
                    reason: "does not cover nordic".into(),
                },
            ],
        };
        let msg = e.to_string();
        assert!(msg.contains("nasa_power: not offered"));
        assert!(msg.contains("nws_forecast: does not cover nordic"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<AvailabilityError>();
    }
}
