//! End-to-end ETo pipeline orchestration.
//!
//! [`run_pipeline`] wires the stages together for one request:
//!
//! 1. Classify the location into a region and resolve the operation mode.
//! 2. Resolve the eligible providers for region, mode, and date range.
//! 3. Fetch each provider through the injected [`ProviderAdapter`] and
//!    quality-control every variable's series independently.
//! 4. Fuse the cleaned provider series per variable with the Kalman
//!    ensemble, adaptive where the [`ReferenceStore`] has a match.
//! 5. Compute daily ETo from the fused series and the site elevation.
//!
//! The core never performs I/O itself: providers, climate references, and
//! elevation arrive through the three traits, so the whole run is
//! deterministic given its inputs. "Today" is part of the request.

mod config;
mod error;
mod output;
mod request;
mod run;
mod traits;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use output::EtoResponse;
pub use request::EtoRequest;
pub use run::run_pipeline;
pub use traits::{ElevationService, ProviderAdapter, ReferenceStore};
