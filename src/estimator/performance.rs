use crate::catalog;
use crate::quantization::ModelQuantization;
use crate::types::PerformanceEstimate;
use crate::utils::round_to;

/// Share of theoretical memory bandwidth achieved in practice
const BANDWIDTH_EFFICIENCY: f64 = 0.35;

/// Bandwidth-bound decode throughput: every token streams all weights once.
///
/// Capacities not in the catalog use its first profile.
pub fn estimate_performance(
    params_b: f64,
    model_quantization: ModelQuantization,
    gpu_vram_gb: f64,
) -> PerformanceEstimate {
    let gpu = catalog::gpu_profile_for(gpu_vram_gb);
    let bytes_per_token = params_b * 1e9 * model_quantization.factor();
    let theoretical = (gpu.bandwidth_gbs * 1e9) / bytes_per_token;

    tracing::trace!(
        gpu = gpu.name,
        bandwidth_gbs = gpu.bandwidth_gbs,
        theoretical_tps = theoretical,
        "throughput lookup"
    );

    PerformanceEstimate {
        tokens_per_second: round_to(theoretical * BANDWIDTH_EFFICIENCY, 1),
    }
}
