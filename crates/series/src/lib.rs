//! Shared data model for the ETo fusion pipeline.
//!
//! Every stage of the pipeline (quality control, Kalman fusion, ETo
//! computation) consumes and produces the same three building blocks:
//!
//! | Type | Role |
//! |------|------|
//! | [`Variable`] | Harmonized weather-variable enum, resolved at ingestion |
//! | [`DailySeries`] | Dense, chronologically ordered day-indexed values |
//! | [`QualityFlags`] | Per-day audit trail written by the QC stages |
//!
//! Provider APIs name the same physical quantity differently (NASA POWER
//! `T2M_MAX`, Open-Meteo `temperature_2m_max`, NWS `temp_celsius`). Adapters
//! translate those names into [`Variable`] once, at the boundary, so the
//! core never string-matches provider conventions.

mod error;
mod flags;
mod observation;
mod series;
mod variable;

pub use error::SeriesError;
pub use flags::QualityFlags;
pub use observation::DailyObservation;
pub use series::DailySeries;
pub use variable::Variable;
