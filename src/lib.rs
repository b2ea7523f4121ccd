//! LLM Sizer - hardware requirement estimates for large language models
//!
//! Given a model size, quantization, context length, batch size and memory
//! architecture, this crate predicts the VRAM needed, how many GPUs that
//! takes, the expected decode throughput and the cheapest cloud instance
//! that can host it. The estimates are closed-form heuristics, not a
//! simulation of any particular runtime.
//!
//! ```
//! use llm_sizer::{estimate, Configuration, GpuRequirement};
//!
//! let recommendation = estimate(&Configuration::default());
//! assert_eq!(recommendation.vram_needed.total_gb, 10.8);
//! assert_eq!(recommendation.gpus_required, GpuRequirement::Count(1));
//! ```

// Public modules
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod quantization;
pub mod types;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-exports for public API
pub use config::{Configuration, InferenceMode, MemoryMode};
pub use engine::{estimate, Estimator, EstimatorBuilder};
pub use error::{EstimatorError, Result};
pub use quantization::{quant_factor, KvCacheQuantization, ModelQuantization};
pub use types::{
    CloudCostEstimate, EstimateReport, GpuRequirement, HardwareSizing, PerformanceEstimate,
    Recommendation, VramBreakdown,
};
