//! Fixed physical bounds per variable.

use etofuse_series::Variable;

/// Which ends of a bound admit the boundary value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusivity {
    /// Closed on both ends.
    Both,
    /// Closed at the minimum, open at the maximum.
    Left,
    /// Open on both ends.
    Neither,
}

/// A fixed [min, max] physical bound with its inclusivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalBounds {
    pub min: f64,
    pub max: f64,
    pub inclusivity: Inclusivity,
}

impl PhysicalBounds {
    /// Whether a finite value satisfies the bound. Non-finite values never do.
    pub fn admits(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self.inclusivity {
            Inclusivity::Both => value >= self.min && value <= self.max,
            Inclusivity::Left => value >= self.min && value < self.max,
            Inclusivity::Neither => value > self.min && value < self.max,
        }
    }
}

/// The physical bound for a variable.
pub fn physical_bounds(variable: Variable) -> PhysicalBounds {
    use Inclusivity::*;
    let (min, max, inclusivity) = match variable {
        Variable::TempMax | Variable::TempMin | Variable::TempMean => (-30.0, 50.0, Neither),
        Variable::HumidityMean => (0.0, 100.0, Both),
        Variable::WindSpeed10m => (0.0, 100.0, Left),
        Variable::Precipitation => (0.0, 450.0, Neither),
        Variable::SolarRadiation => (0.0, 40.0, Left),
        Variable::Pressure => (900.0, 1100.0, Both),
        Variable::SunshineDuration => (0.0, 24.0, Both),
        Variable::Eto => (0.0, 15.0, Left),
    };
    PhysicalBounds { min, max, inclusivity }
}

/// Whether a variable's physical bound is tight enough that the IQR outlier
/// test would be redundant.
pub fn hard_bounded(variable: Variable) -> bool {
    matches!(
        variable,
        Variable::TempMax
            | Variable::TempMin
            | Variable::TempMean
            | Variable::HumidityMean
            | Variable::WindSpeed10m
            | Variable::Precipitation
            | Variable::SolarRadiation
    )
}

/// IQR multiplier for the outlier test: strict for low-variability
/// variables, lenient for high-variability ones.
pub fn iqr_multiplier(variable: Variable) -> f64 {
    match variable {
        Variable::Pressure | Variable::SunshineDuration => 1.2,
        Variable::Eto => 2.25,
        _ => 1.5,
    }
}
