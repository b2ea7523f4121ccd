use crate::{
    config::{Configuration, InferenceMode, MemoryMode},
    error::Result,
    quantization::{KvCacheQuantization, ModelQuantization},
};

use super::engine::Estimator;

/// Builder for constructing a validated [`Estimator`]
#[derive(Debug, Clone, Default)]
pub struct EstimatorBuilder {
    config: Configuration,
}

impl EstimatorBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    pub fn params(mut self, params_b: f64) -> Self {
        self.config.params = params_b;
        self
    }

    pub fn model_quantization(mut self, quantization: ModelQuantization) -> Self {
        self.config.model_quantization = quantization;
        self
    }

    pub fn context_length(mut self, tokens: u32) -> Self {
        self.config.context_length = tokens;
        self
    }

    pub fn kv_cache_quantization(mut self, quantization: KvCacheQuantization) -> Self {
        self.config.kv_cache_quantization = quantization;
        self
    }

    pub fn memory_mode(mut self, mode: MemoryMode) -> Self {
        self.config.memory_mode = mode;
        self
    }

    pub fn system_memory_gb(mut self, gb: f64) -> Self {
        self.config.system_memory_gb = gb;
        self
    }

    pub fn gpu_vram_gb(mut self, gb: f64) -> Self {
        self.config.gpu_vram_gb = gb;
        self
    }

    pub fn inference_mode(mut self, mode: InferenceMode) -> Self {
        self.config.inference_mode = mode;
        self
    }

    pub fn batch_size(mut self, batch_size: u32) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Validate the configuration and build the estimator
    pub fn build(self) -> Result<Estimator> {
        self.config.validate()?;
        Ok(Estimator::new(self.config))
    }
}
