use crate::catalog::{CLOUD_INSTANCES_BY_COST, HOURS_PER_MONTH};
use crate::types::{CloudCostEstimate, GpuRequirement};
use crate::utils::round_to;

/// GPUs per node assumed when a workload needs more than one GPU
const GPUS_PER_NODE: f64 = 8.0;

/// Cheapest cloud instance able to hold `total_vram_gb`.
///
/// Multi-GPU requirements are matched against an 8-GPU node of each
/// instance type and priced per GPU required. Returns `None` when the
/// requirement is unbounded or no catalog entry is large enough.
pub fn estimate_cloud_cost(
    total_vram_gb: f64,
    gpus_required: GpuRequirement,
) -> Option<CloudCostEstimate> {
    let gpu_count = match gpus_required {
        GpuRequirement::Unbounded => return None,
        GpuRequirement::Count(n) if n > 1 => n,
        _ => 1,
    };
    let capacity_scale = if gpu_count > 1 { GPUS_PER_NODE } else { 1.0 };

    let instance = CLOUD_INSTANCES_BY_COST
        .iter()
        .find(|instance| instance.vram_gb * capacity_scale >= total_vram_gb);

    let Some(instance) = instance else {
        tracing::debug!(total_vram_gb, gpu_count, "no cloud instance large enough");
        return None;
    };

    Some(CloudCostEstimate {
        provider: instance.provider.to_string(),
        instance_name: instance.instance.to_string(),
        gpu_label: instance.gpu.to_string(),
        monthly_cost_usd: round_to(
            instance.hourly_cost_usd * f64::from(gpu_count) * HOURS_PER_MONTH,
            0,
        ),
    })
}
