//! Engine module assembling the estimators into one recommendation

mod builder;
mod engine;

pub use builder::EstimatorBuilder;
pub use engine::Estimator;

use crate::{config::Configuration, estimator, types::Recommendation};

/// Produce a recommendation for `config`.
///
/// Total and pure: unknown GPU capacities fall back to the first catalog
/// profile and a missing cloud offer is reported as `None`. The
/// configuration is not validated here.
pub fn estimate(config: &Configuration) -> Recommendation {
    let vram_needed = estimator::estimate_vram(
        config.params,
        config.model_quantization,
        config.context_length,
        config.kv_cache_quantization,
        config.inference_mode,
        config.batch_size,
    );
    let performance = estimator::estimate_performance(
        config.params,
        config.model_quantization,
        config.gpu_vram_gb,
    );
    let sizing = estimator::size_hardware(
        vram_needed.total_gb,
        config.memory_mode,
        config.system_memory_gb,
        config.gpu_vram_gb,
    );
    let cloud_cost = estimator::estimate_cloud_cost(vram_needed.total_gb, sizing.gpus_required);

    tracing::debug!(
        params_b = config.params,
        quantization = %config.model_quantization,
        memory_mode = %config.memory_mode,
        total_vram_gb = vram_needed.total_gb,
        gpus_required = %sizing.gpus_required,
        tokens_per_second = performance.tokens_per_second,
        cloud = cloud_cost.as_ref().map(|c| c.instance_name.as_str()).unwrap_or("none"),
        "estimate complete"
    );

    Recommendation {
        gpu_setup_description: sizing.gpu_setup_description,
        vram_needed,
        fits_unified_memory: sizing.fits_unified_memory,
        system_ram_needed_gb: sizing.system_ram_needed_gb,
        gpus_required: sizing.gpus_required,
        performance,
        cloud_cost,
    }
}
