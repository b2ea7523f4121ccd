use crate::config::InferenceMode;
use crate::quantization::{KvCacheQuantization, ModelQuantization};
use crate::types::VramBreakdown;
use crate::utils::round_to;

/// KV cache GB per billion parameters at the reference context with a 2-byte cache
const KV_GB_PER_BILLION_PARAMS: f64 = 0.7;
const REFERENCE_CONTEXT_TOKENS: f64 = 4096.0;
const BULK_KV_MULTIPLIER: f64 = 1.5;
const BASE_OVERHEAD_GB: f64 = 1.0;
const OVERHEAD_PER_WEIGHT_GB: f64 = 0.05;

/// Estimate VRAM for weights, KV cache and runtime overhead.
///
/// The total is summed from unrounded parts and then rounded, so it can
/// differ from the sum of the rounded fields in the last digit.
/// Inputs are not validated; non-positive values flow through the formulas.
pub fn estimate_vram(
    params_b: f64,
    model_quantization: ModelQuantization,
    context_length: u32,
    kv_cache_quantization: KvCacheQuantization,
    inference_mode: InferenceMode,
    batch_size: u32,
) -> VramBreakdown {
    let model_weights = params_b * model_quantization.factor();

    // KV factor is relative to an F16 cache
    let kv_factor = kv_cache_quantization.factor() / 2.0;
    let mut kv_cache = params_b
        * KV_GB_PER_BILLION_PARAMS
        * (f64::from(context_length) / REFERENCE_CONTEXT_TOKENS)
        * f64::from(batch_size)
        * kv_factor;
    if inference_mode == InferenceMode::Bulk {
        kv_cache *= BULK_KV_MULTIPLIER;
    }

    let overhead = BASE_OVERHEAD_GB + model_weights * OVERHEAD_PER_WEIGHT_GB;
    let total = model_weights + kv_cache + overhead;

    VramBreakdown {
        model_weights_gb: round_to(model_weights, 2),
        kv_cache_gb: round_to(kv_cache, 2),
        overhead_gb: round_to(overhead, 2),
        total_gb: round_to(total, 2),
    }
}
