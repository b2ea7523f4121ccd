//! Result types produced by the estimators

use std::fmt;

use serde::{Deserialize, Serialize};

/// GPU count above which a discrete setup is reported as unbounded
pub const MAX_GPUS: u32 = 8;

/// Memory required by each component, in GB, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VramBreakdown {
    #[serde(rename = "modelWeightsGB")]
    pub model_weights_gb: f64,
    #[serde(rename = "kvCacheGB")]
    pub kv_cache_gb: f64,
    #[serde(rename = "overheadGB")]
    pub overhead_gb: f64,
    #[serde(rename = "totalGB")]
    pub total_gb: f64,
}

/// Expected generation throughput
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEstimate {
    pub tokens_per_second: f64,
}

/// Cheapest catalog instance that can host the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudCostEstimate {
    pub provider: String,
    pub instance_name: String,
    pub gpu_label: String,
    #[serde(rename = "monthlyCostUSD")]
    pub monthly_cost_usd: f64,
}

/// Number of discrete GPUs needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "count")]
pub enum GpuRequirement {
    /// Unified memory; there is no separate GPU pool to count
    NotApplicable,
    Count(u32),
    /// More than [`MAX_GPUS`] would be needed
    Unbounded,
}

impl GpuRequirement {
    /// Finite GPU count, if there is one
    pub fn count(self) -> Option<u32> {
        match self {
            GpuRequirement::Count(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, GpuRequirement::Unbounded)
    }
}

impl fmt::Display for GpuRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuRequirement::NotApplicable => write!(f, "n/a"),
            GpuRequirement::Count(n) => write!(f, "{}", n),
            GpuRequirement::Unbounded => write!(f, "> {}", MAX_GPUS),
        }
    }
}

/// Outcome of sizing the hardware against the VRAM total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSizing {
    pub gpu_setup_description: String,
    pub fits_unified_memory: bool,
    pub gpus_required: GpuRequirement,
    #[serde(rename = "systemRamNeededGB")]
    pub system_ram_needed_gb: f64,
}

/// Everything the estimator knows about one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub gpu_setup_description: String,
    pub vram_needed: VramBreakdown,
    pub fits_unified_memory: bool,
    #[serde(rename = "systemRamNeededGB")]
    pub system_ram_needed_gb: f64,
    pub gpus_required: GpuRequirement,
    pub performance: PerformanceEstimate,
    pub cloud_cost: Option<CloudCostEstimate>,
}

/// A recommendation plus figures a front end shows alongside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    pub recommendation: Recommendation,
    /// Size of the quantized weights on disk
    #[serde(rename = "onDiskSizeGB")]
    pub on_disk_size_gb: f64,
    /// Share of one GPU's (or the unified pool's) capacity in use, capped at 100
    pub vram_utilization_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_requirement_accessors() {
        assert_eq!(GpuRequirement::Count(3).count(), Some(3));
        assert_eq!(GpuRequirement::Unbounded.count(), None);
        assert!(GpuRequirement::Unbounded.is_unbounded());
        assert!(!GpuRequirement::NotApplicable.is_unbounded());
    }

    #[test]
    fn test_gpu_requirement_display() {
        assert_eq!(GpuRequirement::Count(2).to_string(), "2");
        assert_eq!(GpuRequirement::Unbounded.to_string(), "> 8");
        assert_eq!(GpuRequirement::NotApplicable.to_string(), "n/a");
    }

    #[test]
    fn test_gpu_requirement_serialization() {
        let json = serde_json::to_value(GpuRequirement::Count(2)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "count", "count": 2}));
        let json = serde_json::to_value(GpuRequirement::Unbounded).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "unbounded"}));
    }
}
