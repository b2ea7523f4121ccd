//! Closed-form estimators, one per concern
//!
//! Every function here is pure: the same inputs always produce the same
//! output and nothing is cached between calls.

mod cloud;
mod performance;
mod sizing;
mod vram;

pub use cloud::estimate_cloud_cost;
pub use performance::estimate_performance;
pub use sizing::{size_hardware, system_ram_needed_gb};
pub use vram::estimate_vram;

use crate::quantization::ModelQuantization;
use crate::utils::round_to;

/// Size of the quantized weights on disk, in GB
pub fn on_disk_size_gb(params_b: f64, model_quantization: ModelQuantization) -> f64 {
    round_to(params_b * model_quantization.factor(), 2)
}

/// Percentage of `capacity_gb` taken by `total_vram_gb`, capped at 100
pub fn vram_utilization_percent(total_vram_gb: f64, capacity_gb: f64) -> f64 {
    round_to((total_vram_gb / capacity_gb * 100.0).min(100.0), 1)
}
