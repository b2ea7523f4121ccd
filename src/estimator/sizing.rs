use crate::config::MemoryMode;
use crate::types::{GpuRequirement, HardwareSizing, MAX_GPUS};
use crate::utils::format_gb;

const MIN_SYSTEM_RAM_GB: f64 = 8.0;
const SYSTEM_RAM_PER_VRAM_GB: f64 = 0.5;

/// System RAM to pair with the accelerator, whatever the memory mode
pub fn system_ram_needed_gb(total_vram_gb: f64) -> f64 {
    (total_vram_gb * SYSTEM_RAM_PER_VRAM_GB).max(MIN_SYSTEM_RAM_GB)
}

/// Decide how many GPUs a discrete setup needs, or whether a unified pool fits.
pub fn size_hardware(
    total_vram_gb: f64,
    memory_mode: MemoryMode,
    system_memory_gb: f64,
    gpu_vram_gb: f64,
) -> HardwareSizing {
    let system_ram_needed_gb = system_ram_needed_gb(total_vram_gb);

    match memory_mode {
        MemoryMode::DiscreteGpu => {
            let count = (total_vram_gb / gpu_vram_gb).ceil() as u32;
            let vram = format_gb(gpu_vram_gb);
            let (gpus_required, description) = match count {
                1 => (GpuRequirement::Count(1), format!("Single {}GB GPU", vram)),
                n if n <= MAX_GPUS => (
                    GpuRequirement::Count(n),
                    format!("{}x {}GB GPUs", n, vram),
                ),
                _ => (GpuRequirement::Unbounded, format!("> {} GPUs", MAX_GPUS)),
            };

            HardwareSizing {
                gpu_setup_description: description,
                fits_unified_memory: false,
                gpus_required,
                system_ram_needed_gb,
            }
        }
        MemoryMode::UnifiedMemory => {
            let fits = system_memory_gb >= total_vram_gb;
            let memory = format_gb(system_memory_gb);
            let description = if fits {
                format!("Fits in {}GB RAM", memory)
            } else {
                format!("Exceeds {}GB RAM", memory)
            };

            HardwareSizing {
                gpu_setup_description: description,
                fits_unified_memory: fits,
                gpus_required: GpuRequirement::NotApplicable,
                system_ram_needed_gb,
            }
        }
    }
}
