use crate::{
    config::{Configuration, MemoryMode},
    estimator,
    types::{EstimateReport, Recommendation},
};

use super::builder::EstimatorBuilder;

/// Estimator bound to one validated configuration
#[derive(Debug, Clone)]
pub struct Estimator {
    config: Configuration,
}

impl Estimator {
    pub(crate) fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Create a new estimator builder
    pub fn builder() -> EstimatorBuilder {
        EstimatorBuilder::new()
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Run every estimator and assemble the recommendation
    pub fn recommend(&self) -> Recommendation {
        super::estimate(&self.config)
    }

    /// Recommendation plus disk size and capacity utilization
    pub fn report(&self) -> EstimateReport {
        let recommendation = self.recommend();
        let capacity_gb = match self.config.memory_mode {
            MemoryMode::DiscreteGpu => self.config.gpu_vram_gb,
            MemoryMode::UnifiedMemory => self.config.system_memory_gb,
        };

        EstimateReport {
            on_disk_size_gb: estimator::on_disk_size_gb(
                self.config.params,
                self.config.model_quantization,
            ),
            vram_utilization_percent: estimator::vram_utilization_percent(
                recommendation.vram_needed.total_gb,
                capacity_gb,
            ),
            recommendation,
        }
    }
}
