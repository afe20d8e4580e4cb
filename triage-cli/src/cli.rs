use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "GP inbox triage feasibility harness", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the synthetic labeled test dataset
    Generate {
        /// Where to write the dataset JSON
        #[arg(short, long, default_value = "test_dataset.json")]
        output: PathBuf,
    },

    /// Run the triage evaluation over a dataset
    Run {
        /// Path to dataset JSON
        #[arg(long, default_value = "test_dataset.json")]
        dataset: PathBuf,

        /// Anthropic model name
        #[arg(long, default_value = triage_model::DEFAULT_MODEL)]
        model: String,

        /// Maximum output tokens per call
        #[arg(long, default_value_t = triage_model::DEFAULT_MAX_TOKENS)]
        max_tokens: u32,

        /// Sampling temperature
        #[arg(long, default_value_t = 0.0)]
        temperature: f64,

        /// Limit number of cases for quick test
        #[arg(long)]
        max_cases: Option<usize>,

        /// Shuffle seed for case order
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Do not call API; validate pipeline only
        #[arg(long)]
        dry_run: bool,

        /// Where to write results JSON
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Input pricing, USD per million tokens
        #[arg(long, default_value_t = 3.0)]
        input_cost_per_mtok_usd: f64,

        /// Output pricing, USD per million tokens
        #[arg(long, default_value_t = 15.0)]
        output_cost_per_mtok_usd: f64,
    },

    /// Summarise a saved results file as Markdown
    Summarise {
        /// Path to triage_test_results_*.json
        results_json: PathBuf,

        /// Write summary markdown to this path instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
