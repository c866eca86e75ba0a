//! Static weather-provider catalog and availability resolution.
//!
//! Six providers form a closed set; each carries region coverage, a variable
//! list per region, and a date window per operation mode. The window is a
//! function of "today", which callers always pass explicitly.
//!
//! | Provider | Coverage | Modes |
//! |----------|----------|-------|
//! | [`ProviderId::NasaPower`] | global | historical, current |
//! | [`ProviderId::OpenMeteoArchive`] | global | historical, current |
//! | [`ProviderId::OpenMeteoForecast`] | global | current, forecast |
//! | [`ProviderId::MetNorway`] | global (full set in the Nordic bbox) | forecast |
//! | [`ProviderId::NwsForecast`] | USA only | forecast |
//! | [`ProviderId::NwsStations`] | USA only | forecast (today only) |
//!
//! ```
//! use chrono::NaiveDate;
//! use etofuse_geo::Region;
//! use etofuse_request::OperationMode;
//! use etofuse_sources::SourceCatalog;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
//! let start = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
//! let report = SourceCatalog::standard().available_sources(
//!     Region::Global,
//!     OperationMode::DashboardCurrent,
//!     start,
//!     today,
//!     today,
//!     None,
//! )?;
//! assert!(!report.ranked.is_empty());
//! # Ok::<(), etofuse_sources::AvailabilityError>(())
//! ```

mod availability;
mod catalog;
mod error;
mod provider;

pub use availability::{AvailabilityReport, ProviderRejection};
pub use catalog::{ProviderDescriptor, SourceCatalog, TemporalType};
pub use error::AvailabilityError;
pub use provider::ProviderId;
