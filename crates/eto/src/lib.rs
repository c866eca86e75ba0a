//! Daily reference evapotranspiration (ETo) per FAO-56.
//!
//! The calculator turns fused daily weather series plus site latitude and
//! elevation into one [`EToRecord`] per day. FAO-56 Penman-Monteith is the
//! primary method; days missing any of its inputs fall back to Hargreaves
//! (temperature and solar geometry only); days missing even temperature are
//! recorded as gaps, never dropped.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`solar`] | Extraterrestrial radiation Ra(latitude, day-of-year) |
//! | [`atmosphere`] | Elevation correction and unit conversions |
//! | `penman`, `hargreaves` | The two ETo equations |
//! | `compute` | Per-day method selection over a series batch |
//!
//! All radiation is in MJ/m²/day, temperatures in °C, pressure in kPa, wind
//! in m/s, ETo in mm/day.

pub mod atmosphere;
pub mod solar;

mod compute;
mod error;
mod hargreaves;
mod penman;
mod record;

pub use compute::compute_eto;
pub use error::EtoError;
pub use hargreaves::hargreaves;
pub use penman::{penman_monteith, PenmanInputs};
pub use record::{EtoMethod, EToRecord};
