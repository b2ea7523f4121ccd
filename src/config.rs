// Location: src/config.rs

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{EstimatorError, Result};
use crate::quantization::{KvCacheQuantization, ModelQuantization};

/// Caller-supplied description of the model and the hardware it should run on.
///
/// Every field is a primitive or a short enum identifier, so a configuration
/// round-trips through JSON and through [`Configuration::to_query_string`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Model size in billions of parameters
    pub params: f64,

    /// Weight quantization
    pub model_quantization: ModelQuantization,

    /// Context window in tokens
    pub context_length: u32,

    /// KV cache quantization
    pub kv_cache_quantization: KvCacheQuantization,

    /// Discrete GPU or unified memory
    pub memory_mode: MemoryMode,

    /// System memory (GB), the capacity pool in unified mode
    #[serde(rename = "systemMemoryGB")]
    pub system_memory_gb: f64,

    /// Capacity of one GPU (GB)
    #[serde(rename = "gpuVramGB")]
    pub gpu_vram_gb: f64,

    /// Token-by-token or bulk workload
    pub inference_mode: InferenceMode,

    /// Concurrent sequences
    pub batch_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemoryMode {
    DiscreteGpu,
    UnifiedMemory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceMode {
    Incremental,
    Bulk,
}

impl MemoryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MemoryMode::DiscreteGpu => "discrete",
            MemoryMode::UnifiedMemory => "unified",
        }
    }
}

impl InferenceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InferenceMode::Incremental => "incremental",
            InferenceMode::Bulk => "bulk",
        }
    }
}

impl fmt::Display for MemoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoryMode {
    type Err = EstimatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discrete" | "discrete_gpu" | "gpu" => Ok(MemoryMode::DiscreteGpu),
            "unified" | "unified_memory" => Ok(MemoryMode::UnifiedMemory),
            _ => Err(EstimatorError::UnknownVariant {
                kind: "memory mode",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for InferenceMode {
    type Err = EstimatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "incremental" => Ok(InferenceMode::Incremental),
            "bulk" => Ok(InferenceMode::Bulk),
            _ => Err(EstimatorError::UnknownVariant {
                kind: "inference mode",
                value: s.to_string(),
            }),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            params: 8.0,
            model_quantization: ModelQuantization::Q4,
            context_length: 8192,
            kv_cache_quantization: KvCacheQuantization::Q8,
            memory_mode: MemoryMode::DiscreteGpu,
            system_memory_gb: 128.0,
            gpu_vram_gb: 24.0,
            inference_mode: InferenceMode::Incremental,
            batch_size: 1,
        }
    }
}

// Short keys used by the shareable query string
const KEY_PARAMS: &str = "p";
const KEY_MODEL_QUANT: &str = "q";
const KEY_CONTEXT: &str = "ctx";
const KEY_KV_QUANT: &str = "kv";
const KEY_MEMORY_MODE: &str = "mode";
const KEY_SYSTEM_MEMORY: &str = "ram";
const KEY_GPU_VRAM: &str = "vram";
const KEY_INFERENCE_MODE: &str = "inf";
const KEY_BATCH: &str = "batch";

impl Configuration {
    /// Unified-memory configuration with a `memory_gb` pool.
    ///
    /// The GPU capacity is set to the same figure, which is what the
    /// throughput lookup keys on for Apple-style machines.
    pub fn unified(memory_gb: f64) -> Self {
        Self {
            memory_mode: MemoryMode::UnifiedMemory,
            system_memory_gb: memory_gb,
            gpu_vram_gb: memory_gb,
            ..Default::default()
        }
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Compact `key=value&...` form for sharing a configuration
    pub fn to_query_string(&self) -> String {
        [
            (KEY_PARAMS, self.params.to_string()),
            (KEY_MODEL_QUANT, self.model_quantization.to_string()),
            (KEY_CONTEXT, self.context_length.to_string()),
            (KEY_KV_QUANT, self.kv_cache_quantization.to_string()),
            (KEY_MEMORY_MODE, self.memory_mode.to_string()),
            (KEY_SYSTEM_MEMORY, self.system_memory_gb.to_string()),
            (KEY_GPU_VRAM, self.gpu_vram_gb.to_string()),
            (KEY_INFERENCE_MODE, self.inference_mode.to_string()),
            (KEY_BATCH, self.batch_size.to_string()),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
    }

    /// Parse the output of [`Configuration::to_query_string`].
    ///
    /// A leading `?` is accepted, unknown keys are ignored and missing keys
    /// keep their defaults. A value that does not parse is an error.
    pub fn from_query_string(query: &str) -> Result<Self> {
        let mut config = Self::default();
        let query = query.trim().trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                KEY_PARAMS => config.params = parse_number(value, "params")?,
                KEY_MODEL_QUANT => config.model_quantization = value.parse()?,
                KEY_CONTEXT => config.context_length = parse_number(value, "contextLength")?,
                KEY_KV_QUANT => config.kv_cache_quantization = value.parse()?,
                KEY_MEMORY_MODE => config.memory_mode = value.parse()?,
                KEY_SYSTEM_MEMORY => {
                    config.system_memory_gb = parse_number(value, "systemMemoryGB")?
                }
                KEY_GPU_VRAM => config.gpu_vram_gb = parse_number(value, "gpuVramGB")?,
                KEY_INFERENCE_MODE => config.inference_mode = value.parse()?,
                KEY_BATCH => config.batch_size = parse_number(value, "batchSize")?,
                _ => tracing::debug!(key, "ignoring unknown query key"),
            }
        }

        Ok(config)
    }

    /// Check that every numeric field is positive and finite.
    ///
    /// Estimation does not require this; it is the check a caller runs
    /// before trusting user input.
    pub fn validate(&self) -> Result<()> {
        require_positive(self.params, "params")?;
        require_positive(self.system_memory_gb, "systemMemoryGB")?;
        require_positive(self.gpu_vram_gb, "gpuVramGB")?;

        if self.context_length == 0 {
            return Err(EstimatorError::configuration(
                "contextLength",
                "Context length must be at least one token",
            ));
        }

        if self.batch_size == 0 {
            return Err(EstimatorError::configuration(
                "batchSize",
                "Batch size must be at least 1",
            ));
        }

        if !catalog::is_known_gpu(self.gpu_vram_gb) {
            tracing::warn!(
                gpu_vram_gb = self.gpu_vram_gb,
                "No GPU profile with this capacity; throughput uses the fallback profile"
            );
        }

        Ok(())
    }
}

fn parse_number<T: FromStr>(value: &str, parameter: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        EstimatorError::configuration(parameter, format!("'{}' is not a valid number", value))
    })
}

fn require_positive(value: f64, parameter: &str) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimatorError::configuration(
            parameter,
            format!("must be a positive number, got {}", value),
        ))
    }
}
