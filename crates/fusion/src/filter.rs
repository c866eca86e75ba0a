//! The scalar Kalman recursion.

/// Noise parameters never drop below this, keeping the recursion stable for
/// degenerate references (zero historical spread).
const NOISE_FLOOR: f64 = 1e-4;

/// Covariance assigned when the first measurement seeds an unseeded filter.
const SEED_COVARIANCE: f64 = 1.0;

/// One variable's scalar Kalman filter.
///
/// Owned exclusively by one fusion run; created fresh per run and variable,
/// never shared or reused across runs or locations.
#[derive(Debug, Clone, PartialEq)]
pub struct KalmanFilterState {
    estimate: Option<f64>,
    error_covariance: f64,
    process_noise: f64,
    measurement_noise: f64,
}

impl KalmanFilterState {
    /// A filter with no prior; the first measurement seeds it.
    pub fn unseeded(process_noise: f64, measurement_noise: f64) -> Self {
        Self {
            estimate: None,
            error_covariance: SEED_COVARIANCE,
            process_noise: process_noise.max(NOISE_FLOOR),
            measurement_noise: measurement_noise.max(NOISE_FLOOR),
        }
    }

    /// A filter seeded with a climatological prior.
    pub fn with_prior(
        prior_mean: f64,
        prior_variance: f64,
        process_noise: f64,
        measurement_noise: f64,
    ) -> Self {
        Self {
            estimate: Some(prior_mean),
            error_covariance: prior_variance.max(NOISE_FLOOR),
            process_noise: process_noise.max(NOISE_FLOOR),
            measurement_noise: measurement_noise.max(NOISE_FLOOR),
        }
    }

    /// Time step: grows uncertainty by the process noise. A no-op until the
    /// filter is seeded.
    pub fn predict(&mut self) {
        if self.estimate.is_some() {
            self.error_covariance += self.process_noise;
        }
    }

    /// Measurement step: folds one observation in, returns the new estimate.
    pub fn update(&mut self, measurement: f64) -> f64 {
        match self.estimate {
            None => {
                self.estimate = Some(measurement);
                self.error_covariance = SEED_COVARIANCE;
                measurement
            }
            Some(estimate) => {
                let gain = self.error_covariance / (self.error_covariance + self.measurement_noise);
                let updated = estimate + gain * (measurement - estimate);
                self.estimate = Some(updated);
                self.error_covariance *= 1.0 - gain;
                updated
            }
        }
    }

    /// Current estimate, if seeded.
    pub fn estimate(&self) -> Option<f64> {
        self.estimate
    }

    /// Current error covariance.
    pub fn error_covariance(&self) -> f64 {
        self.error_covariance
    }
}
