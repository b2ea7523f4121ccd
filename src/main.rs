use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use llm_sizer::{
    utils::{setup_logging, LogConfig},
    Configuration, EstimateReport, Estimator, InferenceMode, KvCacheQuantization, MemoryMode,
    ModelQuantization,
};

#[derive(Parser)]
#[command(name = "llm-sizer")]
#[command(
    about = "Estimate the hardware needed to run a large language model",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Load the configuration from a JSON file
    #[arg(long, value_name = "FILE", conflicts_with = "query")]
    config: Option<PathBuf>,

    /// Load the configuration from a shared query string (p=8&q=Q4&...)
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Model size in billions of parameters
    #[arg(short, long)]
    params: Option<f64>,

    /// Weight quantization: F32, F16, Q8, Q6, Q5, Q4, Q3, Q2, GPTQ, AWQ
    #[arg(short, long)]
    quant: Option<ModelQuantization>,

    /// Context length in tokens
    #[arg(short, long)]
    context: Option<u32>,

    /// KV cache quantization: F32, F16, Q8, Q5, Q4
    #[arg(long)]
    kv_quant: Option<KvCacheQuantization>,

    /// Memory architecture: discrete or unified
    #[arg(short, long)]
    mode: Option<MemoryMode>,

    /// System memory in GB (the capacity pool in unified mode)
    #[arg(long)]
    system_memory: Option<f64>,

    /// VRAM of one GPU in GB
    #[arg(short = 'g', long)]
    gpu_vram: Option<f64>,

    /// Inference workload: incremental or bulk
    #[arg(long)]
    inference: Option<InferenceMode>,

    /// Number of concurrent sequences
    #[arg(short, long)]
    batch: Option<u32>,

    /// Output results as JSON (for tool integration)
    #[arg(long)]
    json: bool,

    /// Print the shareable query string for this configuration
    #[arg(long)]
    share: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn configuration(&self) -> Result<Configuration> {
        let mut config = match (&self.config, &self.query) {
            (Some(path), _) => Configuration::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            (None, Some(query)) => Configuration::from_query_string(query)?,
            (None, None) => Configuration::default(),
        };

        if let Some(params) = self.params {
            config.params = params;
        }
        if let Some(quant) = self.quant {
            config.model_quantization = quant;
        }
        if let Some(context) = self.context {
            config.context_length = context;
        }
        if let Some(kv_quant) = self.kv_quant {
            config.kv_cache_quantization = kv_quant;
        }
        if let Some(mode) = self.mode {
            config.memory_mode = mode;
        }
        if let Some(system_memory) = self.system_memory {
            config.system_memory_gb = system_memory;
        }
        if let Some(gpu_vram) = self.gpu_vram {
            config.gpu_vram_gb = gpu_vram;
        }
        if let Some(inference) = self.inference {
            config.inference_mode = inference;
        }
        if let Some(batch) = self.batch {
            config.batch_size = batch;
        }

        Ok(config)
    }
}

fn display_report(config: &Configuration, report: &EstimateReport) {
    let rec = &report.recommendation;
    let vram = &rec.vram_needed;

    println!("\n=== Configuration ===");
    println!(
        "Model:        {}B @ {} (KV cache {})",
        config.params, config.model_quantization, config.kv_cache_quantization
    );
    println!(
        "Context:      {} tokens x {} batch ({})",
        config.context_length, config.batch_size, config.inference_mode
    );
    match config.memory_mode {
        MemoryMode::DiscreteGpu => {
            println!("Hardware:     discrete GPU, {}GB VRAM", config.gpu_vram_gb)
        }
        MemoryMode::UnifiedMemory => {
            println!("Hardware:     unified memory, {}GB", config.system_memory_gb)
        }
    }

    println!("\n=== VRAM ===");
    println!("Model weights: {:>8.2} GB", vram.model_weights_gb);
    println!("KV cache:      {:>8.2} GB", vram.kv_cache_gb);
    println!("Overhead:      {:>8.2} GB", vram.overhead_gb);
    println!(
        "Total:         {:>8.2} GB ({:.1}% of capacity)",
        vram.total_gb, report.vram_utilization_percent
    );

    println!("\n=== Recommendation ===");
    println!("GPU setup:     {}", rec.gpu_setup_description);
    println!("System RAM:    {:.2} GB", rec.system_ram_needed_gb);
    println!("Disk size:     {:.2} GB", report.on_disk_size_gb);
    println!("Throughput:    {:.1} tokens/s", rec.performance.tokens_per_second);
    match &rec.cloud_cost {
        Some(cost) => println!(
            "Cloud:         {} {} ({}) ~${:.0}/month",
            cost.provider, cost.instance_name, cost.gpu_label, cost.monthly_cost_usd
        ),
        None => println!("Cloud:         not available"),
    }
}

fn run(cli: Cli) -> Result<()> {
    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };
    setup_logging(log_config).map_err(|e| anyhow!(e))?;

    let config = cli.configuration()?;
    let estimator = Estimator::builder().with_config(config).build()?;
    let report = estimator.report();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(estimator.config(), &report);
    }

    if cli.share {
        println!("\n{}", estimator.config().to_query_string());
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
