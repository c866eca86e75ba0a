//! Quality control for one provider's single-variable daily series.
//!
//! Three ordered stages, applied by [`run_quality_control`]:
//!
//! 1. **Physical validation** — fixed per-variable bounds with individual
//!    inclusivity; solar radiation is additionally held inside the
//!    extraterrestrial-radiation envelope for the site latitude.
//! 2. **Outlier detection** — global IQR test with an adaptive multiplier;
//!    variables already hard-bounded physically are excluded.
//! 3. **Imputation** — two-directional linear interpolation, then forward
//!    fill, backward fill, and series mean for residual edge gaps.
//!
//! Data issues produce warnings and missing values, never errors; only
//! malformed input (an invalid latitude) fails. Re-running validation on an
//! already-validated series changes nothing.

mod config;
mod error;
mod impute;
mod limits;
mod outliers;
mod pipeline;
mod validate;

pub use config::QcConfig;
pub use error::QcError;
pub use impute::impute_gaps;
pub use limits::{physical_bounds, Inclusivity, PhysicalBounds};
pub use outliers::detect_outliers;
pub use pipeline::{run_quality_control, QcOutcome};
pub use validate::validate_physical;
