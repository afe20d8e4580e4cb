mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::collections::BTreeMap;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use triage_eval::{EvalConfig, EvalRun};
use triage_model::{AnthropicClient, AnthropicConfig, CostRates, RetryPolicy};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { output } => generate(&output),
        Commands::Run {
            dataset,
            model,
            max_tokens,
            temperature,
            max_cases,
            seed,
            dry_run,
            output_dir,
            input_cost_per_mtok_usd,
            output_cost_per_mtok_usd,
        } => {
            let config = EvalConfig {
                model,
                max_tokens,
                temperature,
                max_cases,
                seed,
                dry_run,
                retry: RetryPolicy::default(),
                rates: CostRates {
                    input_per_mtok_usd: input_cost_per_mtok_usd,
                    output_per_mtok_usd: output_cost_per_mtok_usd,
                },
            };
            run(&dataset, config, &output_dir).await
        }
        Commands::Summarise { results_json, out } => summarise(&results_json, out.as_deref()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn generate(output: &Path) -> Result<()> {
    let cases = triage_dataset::generate()?;
    triage_dataset::save_cases(output, &cases)?;

    let mut type_dist: BTreeMap<String, usize> = BTreeMap::new();
    let mut urgency_dist: BTreeMap<String, usize> = BTreeMap::new();
    let mut ambiguous = 0usize;
    for case in &cases {
        *type_dist.entry(case.item_type.to_string()).or_default() += 1;
        *urgency_dist.entry(case.ground_truth_urgency.to_string()).or_default() += 1;
        if case.ambiguous {
            ambiguous += 1;
        }
    }

    println!("Generated {} test cases", cases.len());
    println!("\nItem Type Distribution:");
    for (item_type, count) in &type_dist {
        println!("  {}: {}", item_type, count);
    }
    println!("\nUrgency Distribution:");
    for (urgency, count) in &urgency_dist {
        println!("  {}: {} ({:.0}%)", urgency, count, *count as f64 / cases.len() as f64 * 100.0);
    }
    println!("\nAmbiguous cases: {}", ambiguous);
    println!("\nDataset saved to: {}", output.display());
    Ok(())
}

async fn run(dataset: &Path, config: EvalConfig, output_dir: &Path) -> Result<()> {
    let cases = triage_dataset::load_cases(dataset)?;

    println!("Loaded {} test cases from {}", cases.len(), dataset.display());
    println!("Model: {}", config.model);
    println!("Dry run: {}", config.dry_run);
    println!("{}", "=".repeat(60));

    // Credential problems surface here, before any call is attempted.
    let run = if config.dry_run {
        triage_eval::evaluate(&cases, None, &config).await?
    } else {
        let client = AnthropicClient::new(
            AnthropicConfig::from_env(&config.model)?
                .with_max_tokens(config.max_tokens)
                .with_temperature(config.temperature),
        )?;
        triage_eval::evaluate(&cases, Some(&client), &config).await?
    };

    let path = run.save(output_dir)?;

    println!("\n{}", triage_eval::format_console_summary(&run));
    println!("Results saved to: {}", path.display());
    Ok(())
}

fn summarise(results_json: &Path, out: Option<&Path>) -> Result<()> {
    let run = EvalRun::load(results_json)?;
    let markdown = triage_eval::build_markdown_summary(&run);

    match out {
        Some(path) => {
            std::fs::write(path, &markdown)?;
            println!("Wrote summary to {}", path.display());
        }
        None => println!("{}", markdown),
    }
    Ok(())
}
