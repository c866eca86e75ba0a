//! Kalman ensemble fusion.
//!
//! Merges 1..N providers' same-variable daily measurements into one estimate
//! per variable per day, with propagated uncertainty. Each variable owns an
//! independent scalar filter created fresh for the run; variables fuse in
//! parallel, days within one variable strictly in order (the recursion is
//! order-dependent).
//!
//! Two strategies:
//!
//! - [`Strategy::Simple`] — filter seeded from the first measurement, fixed
//!   conservative noise. Used when no climate reference is available.
//! - [`Strategy::Adaptive`] — prior seeded from the monthly climate normal
//!   and its historical daily spread, measurement noise inflated by the
//!   reference confidence weight so estimates anchor to climatology.
//!
//! Days with no provider value stay missing; the fuser never imputes. The
//! run fails only when every variable has zero usable values.

mod error;
mod filter;
mod fuse;
mod reference;

pub use error::FusionError;
pub use filter::KalmanFilterState;
pub use fuse::{fuse, FusionResult, ProviderSeries, Strategy};
pub use reference::{ClimateNormals, FusionReference};
