use llm_sizer::{
    estimate, Configuration, Estimator, GpuRequirement, InferenceMode, KvCacheQuantization,
    MemoryMode, ModelQuantization, Recommendation, VramBreakdown,
};
use pretty_assertions::assert_eq;

fn reference_config() -> Configuration {
    Configuration {
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

#[test]
fn test_reference_recommendation() {
    let rec = estimate(&reference_config());

    assert_eq!(
        rec.vram_needed,
        VramBreakdown {
            model_weights_gb: 4.0,
            kv_cache_gb: 5.6,
            overhead_gb: 1.2,
            total_gb: 10.8,
        }
    );
    assert_eq!(rec.gpus_required, GpuRequirement::Count(1));
    assert_eq!(rec.gpu_setup_description, "Single 24GB GPU");
    assert!(!rec.fits_unified_memory);
    assert_eq!(rec.performance.tokens_per_second, 88.2);

    let cloud = rec.cloud_cost.expect("a T4 instance fits 10.8GB");
    assert_eq!(cloud.provider, "AWS");
    assert_eq!(cloud.instance_name, "g4dn.xlarge");
    assert_eq!(cloud.monthly_cost_usd, 384.0);
}

#[test]
fn test_multi_gpu_recommendation() {
    let config = Configuration {
        params: 13.0,
        model_quantization: ModelQuantization::F16,
        gpu_vram_gb: 8.0,
        context_length: 4096,
        ..reference_config()
    };
    let rec = estimate(&config);

    // 26 weights + 4.55 cache + 2.3 overhead
    assert_eq!(rec.vram_needed.total_gb, 32.85);
    assert_eq!(rec.gpus_required, GpuRequirement::Count(5));
    assert_eq!(rec.gpu_setup_description, "5x 8GB GPUs");

    let cloud = rec.cloud_cost.expect("an 8-GPU T4 node fits 32.85GB");
    assert_eq!(cloud.instance_name, "g4dn.xlarge");
    assert_eq!(cloud.monthly_cost_usd, 1920.0);
}

#[test]
fn test_gpu_count_matches_ceiling() {
    for params in [1.0, 7.0, 13.0, 34.0, 70.0] {
        for gpu_vram in [8.0, 12.0, 16.0, 24.0, 48.0, 80.0] {
            let config = Configuration {
                params,
                gpu_vram_gb: gpu_vram,
                ..reference_config()
            };
            let rec = estimate(&config);
            let expected = (rec.vram_needed.total_gb / gpu_vram).ceil() as u32;
            if expected > 8 {
                assert_eq!(rec.gpus_required, GpuRequirement::Unbounded);
                assert!(rec.cloud_cost.is_none());
            } else {
                assert_eq!(rec.gpus_required, GpuRequirement::Count(expected));
            }
        }
    }
}

#[test]
fn test_too_many_gpus_is_unbounded() {
    let config = Configuration {
        params: 180.0,
        model_quantization: ModelQuantization::F16,
        gpu_vram_gb: 24.0,
        ..reference_config()
    };
    let rec = estimate(&config);

    assert_eq!(rec.gpus_required, GpuRequirement::Unbounded);
    assert_eq!(rec.gpu_setup_description, "> 8 GPUs");
    assert_eq!(rec.cloud_cost, None);
}

#[test]
fn test_unified_memory_fit() {
    let fits = estimate(&Configuration::unified(64.0));
    assert!(fits.fits_unified_memory);
    assert_eq!(fits.gpus_required, GpuRequirement::NotApplicable);
    assert_eq!(fits.gpu_setup_description, "Fits in 64GB RAM");

    let config = Configuration {
        params: 70.0,
        ..Configuration::unified(64.0)
    };
    let exceeds = estimate(&config);
    assert!(!exceeds.fits_unified_memory);
    assert_eq!(exceeds.gpu_setup_description, "Exceeds 64GB RAM");
    assert_eq!(
        exceeds.fits_unified_memory,
        config.system_memory_gb >= exceeds.vram_needed.total_gb
    );
}

#[test]
fn test_unknown_gpu_capacity_uses_fallback() {
    let config = Configuration {
        gpu_vram_gb: 20.0,
        ..reference_config()
    };
    let rec = estimate(&config);
    assert_eq!(rec.performance.tokens_per_second, 39.2);
    assert_eq!(rec.gpus_required, GpuRequirement::Count(1));
}

#[test]
fn test_rounding_follows_stored_value() {
    let config = Configuration {
        params: 7.0,
        model_quantization: ModelQuantization::F32,
        context_length: 4096,
        kv_cache_quantization: KvCacheQuantization::Q5,
        batch_size: 4,
        ..reference_config()
    };
    let rec = estimate(&config);

    assert_eq!(rec.vram_needed.total_gb, 36.52);
    assert_eq!(rec.system_ram_needed_gb, 18.26);
    assert_eq!(rec.gpus_required, GpuRequirement::Count(2));

    let bulk = estimate(&Configuration {
        model_quantization: ModelQuantization::F16,
        kv_cache_quantization: KvCacheQuantization::Q8,
        inference_mode: InferenceMode::Bulk,
        batch_size: 1,
        ..config
    });
    assert_eq!(bulk.vram_needed.kv_cache_gb, 3.67);
}

#[test]
fn test_query_string_reproduces_recommendation() {
    let config = Configuration {
        params: 34.0,
        inference_mode: InferenceMode::Bulk,
        batch_size: 2,
        ..reference_config()
    };
    let shared = Configuration::from_query_string(&config.to_query_string()).unwrap();
    assert_eq!(estimate(&shared), estimate(&config));
}

#[test]
fn test_report_json_shape() {
    let report = Estimator::builder()
        .with_config(reference_config())
        .build()
        .unwrap()
        .report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["onDiskSizeGB"], 4.0);
    assert_eq!(json["recommendation"]["vramNeeded"]["totalGB"], 10.8);
    assert_eq!(json["recommendation"]["gpusRequired"]["count"], 1);
    assert_eq!(json["recommendation"]["cloudCost"]["instanceName"], "g4dn.xlarge");

    let back: Recommendation = serde_json::from_value(json["recommendation"].clone()).unwrap();
    assert_eq!(back, report.recommendation);
}
