//! Pipeline configuration.

use etofuse_qc::QcConfig;

/// Tunable knobs for one pipeline run. `Default` matches production
/// settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Quality-control settings applied to every provider series.
    pub qc: QcConfig,
    /// How far away a climate-normal reference may sit and still be used.
    pub reference_max_distance_km: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            qc: QcConfig::default(),
            reference_max_distance_km: 50.0,
        }
    }
}
