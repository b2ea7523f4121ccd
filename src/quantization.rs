//! Quantization identifiers and their bytes-per-parameter factors
//!
//! Factors are relative to a one byte per parameter baseline (Q8 = 1.0).
//! The KV cache set is a subset of the model set and shares its table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;

/// Factor returned for identifiers that are not in the table
pub const DEFAULT_QUANT_FACTOR: f64 = 1.0;

/// Weight quantization of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelQuantization {
    F32,
    F16,
    Q8,
    Q6,
    Q5,
    Q4,
    Q3,
    Q2,
    #[serde(rename = "GPTQ")]
    Gptq,
    #[serde(rename = "AWQ")]
    Awq,
}

/// Quantization applied to the KV cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KvCacheQuantization {
    F32,
    F16,
    Q8,
    Q5,
    Q4,
}

impl ModelQuantization {
    pub const ALL: [ModelQuantization; 10] = [
        ModelQuantization::F32,
        ModelQuantization::F16,
        ModelQuantization::Q8,
        ModelQuantization::Q6,
        ModelQuantization::Q5,
        ModelQuantization::Q4,
        ModelQuantization::Q3,
        ModelQuantization::Q2,
        ModelQuantization::Gptq,
        ModelQuantization::Awq,
    ];

    /// Bytes per parameter relative to an 8-bit baseline
    pub fn factor(self) -> f64 {
        match self {
            ModelQuantization::F32 => 4.0,
            ModelQuantization::F16 => 2.0,
            ModelQuantization::Q8 => 1.0,
            ModelQuantization::Q6 => 0.75,
            ModelQuantization::Q5 => 0.625,
            ModelQuantization::Q4 => 0.5,
            ModelQuantization::Q3 => 0.375,
            ModelQuantization::Q2 => 0.25,
            ModelQuantization::Gptq | ModelQuantization::Awq => 0.6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModelQuantization::F32 => "F32",
            ModelQuantization::F16 => "F16",
            ModelQuantization::Q8 => "Q8",
            ModelQuantization::Q6 => "Q6",
            ModelQuantization::Q5 => "Q5",
            ModelQuantization::Q4 => "Q4",
            ModelQuantization::Q3 => "Q3",
            ModelQuantization::Q2 => "Q2",
            ModelQuantization::Gptq => "GPTQ",
            ModelQuantization::Awq => "AWQ",
        }
    }
}

impl KvCacheQuantization {
    pub const ALL: [KvCacheQuantization; 5] = [
        KvCacheQuantization::F32,
        KvCacheQuantization::F16,
        KvCacheQuantization::Q8,
        KvCacheQuantization::Q5,
        KvCacheQuantization::Q4,
    ];

    pub fn factor(self) -> f64 {
        ModelQuantization::from(self).factor()
    }

    pub fn as_str(self) -> &'static str {
        ModelQuantization::from(self).as_str()
    }
}

impl From<KvCacheQuantization> for ModelQuantization {
    fn from(kv: KvCacheQuantization) -> Self {
        match kv {
            KvCacheQuantization::F32 => ModelQuantization::F32,
            KvCacheQuantization::F16 => ModelQuantization::F16,
            KvCacheQuantization::Q8 => ModelQuantization::Q8,
            KvCacheQuantization::Q5 => ModelQuantization::Q5,
            KvCacheQuantization::Q4 => ModelQuantization::Q4,
        }
    }
}

impl fmt::Display for ModelQuantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for KvCacheQuantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(value: &str) -> String {
    let upper = value.trim().to_uppercase();
    match upper.as_str() {
        "FP32" => "F32".to_string(),
        "FP16" => "F16".to_string(),
        _ => upper,
    }
}

impl FromStr for ModelQuantization {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        ModelQuantization::ALL
            .into_iter()
            .find(|q| q.as_str() == normalized)
            .ok_or_else(|| EstimatorError::UnknownVariant {
                kind: "model quantization",
                value: s.to_string(),
            })
    }
}

impl FromStr for KvCacheQuantization {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        KvCacheQuantization::ALL
            .into_iter()
            .find(|q| q.as_str() == normalized)
            .ok_or_else(|| EstimatorError::UnknownVariant {
                kind: "KV cache quantization",
                value: s.to_string(),
            })
    }
}

/// Look up a factor by identifier, falling back to [`DEFAULT_QUANT_FACTOR`]
pub fn quant_factor(id: &str) -> f64 {
    id.parse::<ModelQuantization>()
        .map(ModelQuantization::factor)
        .unwrap_or(DEFAULT_QUANT_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_table() {
        assert_eq!(ModelQuantization::F32.factor(), 4.0);
        assert_eq!(ModelQuantization::F16.factor(), 2.0);
        assert_eq!(ModelQuantization::Q8.factor(), 1.0);
        assert_eq!(ModelQuantization::Q6.factor(), 0.75);
        assert_eq!(ModelQuantization::Q5.factor(), 0.625);
        assert_eq!(ModelQuantization::Q4.factor(), 0.5);
        assert_eq!(ModelQuantization::Q3.factor(), 0.375);
        assert_eq!(ModelQuantization::Q2.factor(), 0.25);
        assert_eq!(ModelQuantization::Gptq.factor(), 0.6);
        assert_eq!(ModelQuantization::Awq.factor(), 0.6);
    }

    #[test]
    fn test_factors_strictly_decrease_with_bit_width() {
        let ladder = [
            ModelQuantization::F32,
            ModelQuantization::F16,
            ModelQuantization::Q8,
            ModelQuantization::Q6,
            ModelQuantization::Q5,
            ModelQuantization::Q4,
            ModelQuantization::Q3,
            ModelQuantization::Q2,
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0].factor() > pair[1].factor(), "{} <= {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_factors_within_bounds() {
        for q in ModelQuantization::ALL {
            assert!(q.factor() > 0.0 && q.factor() <= 4.0);
        }
    }

    #[test]
    fn test_kv_cache_shares_model_table() {
        for kv in KvCacheQuantization::ALL {
            assert_eq!(kv.factor(), ModelQuantization::from(kv).factor());
        }
    }

    #[test]
    fn test_unknown_identifier_falls_back() {
        assert_eq!(quant_factor("Q9"), DEFAULT_QUANT_FACTOR);
        assert_eq!(quant_factor(""), DEFAULT_QUANT_FACTOR);
        assert_eq!(quant_factor("q4"), 0.5);
        assert_eq!(quant_factor("awq"), 0.6);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("fp16".parse::<ModelQuantization>().unwrap(), ModelQuantization::F16);
        assert_eq!(" gptq ".parse::<ModelQuantization>().unwrap(), ModelQuantization::Gptq);
        assert_eq!("FP32".parse::<KvCacheQuantization>().unwrap(), KvCacheQuantization::F32);
        assert!("Q6".parse::<KvCacheQuantization>().is_err());
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let json = serde_json::to_string(&ModelQuantization::Gptq).unwrap();
        assert_eq!(json, "\"GPTQ\"");
        let kv: KvCacheQuantization = serde_json::from_str("\"Q5\"").unwrap();
        assert_eq!(kv, KvCacheQuantization::Q5);
    }
}
