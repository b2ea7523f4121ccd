//! Read-only hardware catalogs shared by every estimate

use lazy_static::lazy_static;
use serde::Serialize;

/// Average number of hours in a month, used to turn hourly prices into monthly ones
pub const HOURS_PER_MONTH: f64 = 730.0;

/// Memory capacity and bandwidth of a known GPU
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpuProfile {
    pub name: &'static str,
    pub vram_gb: f64,
    pub bandwidth_gbs: f64,
}

/// A rentable cloud GPU instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloudInstance {
    pub provider: &'static str,
    pub instance: &'static str,
    pub gpu: &'static str,
    pub vram_gb: f64,
    pub hourly_cost_usd: f64,
}

/// Known GPUs. The first entry doubles as the fallback profile.
pub static GPU_PROFILES: [GpuProfile; 8] = [
    GpuProfile {
        name: "RTX 4060 Ti",
        vram_gb: 8.0,
        bandwidth_gbs: 448.0,
    },
    GpuProfile {
        name: "RTX 4070 Ti",
        vram_gb: 12.0,
        bandwidth_gbs: 717.0,
    },
    GpuProfile {
        name: "RTX 4080",
        vram_gb: 16.0,
        bandwidth_gbs: 737.0,
    },
    GpuProfile {
        name: "RTX 4090",
        vram_gb: 24.0,
        bandwidth_gbs: 1008.0,
    },
    GpuProfile {
        name: "RTX 6000 Ada",
        vram_gb: 32.0,
        bandwidth_gbs: 1210.0,
    },
    GpuProfile {
        name: "A100 40GB",
        vram_gb: 40.0,
        bandwidth_gbs: 1555.0,
    },
    GpuProfile {
        name: "RTX A6000 Ada",
        vram_gb: 48.0,
        bandwidth_gbs: 1920.0,
    },
    GpuProfile {
        name: "H100 80GB",
        vram_gb: 80.0,
        bandwidth_gbs: 3350.0,
    },
];

pub static CLOUD_INSTANCES: [CloudInstance; 5] = [
    CloudInstance {
        provider: "AWS",
        instance: "g4dn.xlarge",
        gpu: "NVIDIA T4",
        vram_gb: 16.0,
        hourly_cost_usd: 0.526,
    },
    CloudInstance {
        provider: "AWS",
        instance: "g5.2xlarge",
        gpu: "NVIDIA A10G",
        vram_gb: 24.0,
        hourly_cost_usd: 1.006,
    },
    CloudInstance {
        provider: "GCP",
        instance: "a2-highgpu-1g",
        gpu: "NVIDIA A100",
        vram_gb: 40.0,
        hourly_cost_usd: 3.22,
    },
    CloudInstance {
        provider: "AWS",
        instance: "p4d.24xlarge",
        gpu: "NVIDIA A100",
        vram_gb: 40.0,
        hourly_cost_usd: 32.77,
    },
    CloudInstance {
        provider: "AWS",
        instance: "p5.48xlarge",
        gpu: "NVIDIA H100",
        vram_gb: 80.0,
        hourly_cost_usd: 98.32,
    },
];

lazy_static! {
    /// Cloud catalog ordered by hourly price, cheapest first
    pub static ref CLOUD_INSTANCES_BY_COST: Vec<CloudInstance> = {
        let mut instances = CLOUD_INSTANCES.to_vec();
        instances.sort_by(|a, b| a.hourly_cost_usd.total_cmp(&b.hourly_cost_usd));
        instances
    };
}

/// Profile whose capacity matches `vram_gb` exactly, else the first catalog entry
pub fn gpu_profile_for(vram_gb: f64) -> &'static GpuProfile {
    GPU_PROFILES
        .iter()
        .find(|profile| profile.vram_gb == vram_gb)
        .unwrap_or(&GPU_PROFILES[0])
}

/// Whether `vram_gb` names a GPU in the catalog
pub fn is_known_gpu(vram_gb: f64) -> bool {
    GPU_PROFILES.iter().any(|profile| profile.vram_gb == vram_gb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_profile_lookup() {
        let profile = gpu_profile_for(24.0);
        assert_eq!(profile.bandwidth_gbs, 1008.0);
        assert_eq!(gpu_profile_for(80.0).name, "H100 80GB");
    }

    #[test]
    fn test_profile_fallback() {
        let profile = gpu_profile_for(20.0);
        assert_eq!(profile.vram_gb, 8.0);
        assert_eq!(profile.bandwidth_gbs, 448.0);
        assert!(!is_known_gpu(20.0));
        assert!(is_known_gpu(48.0));
    }

    #[test]
    fn test_cloud_catalog_sorted_by_cost() {
        let costs: Vec<f64> = CLOUD_INSTANCES_BY_COST
            .iter()
            .map(|i| i.hourly_cost_usd)
            .collect();
        assert_eq!(costs.len(), CLOUD_INSTANCES.len());
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(CLOUD_INSTANCES_BY_COST[0].instance, "g4dn.xlarge");
    }
}
