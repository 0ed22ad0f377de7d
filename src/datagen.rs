//! Sample claims dataset generator.
//!
//! Writes a deterministic sample dataset to a JSON file for use with the
//! claimline GUI.

use anyhow::{Context, Result};
use claimline::generate_sample_dataset;
use std::env;
use std::fs;

struct Config {
    seed: u64,
    output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: 42,
            output_file: "claims-sample.json".to_string(),
        }
    }
}

fn print_usage(program: &str) {
    println!("Usage: {program} [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --seed N        Random seed for claim periods (default: 42)");
    println!("  --output FILE   Output file path (default: claims-sample.json)");
    println!("  --help          Show this help message");
}

fn parse_args() -> Result<Option<Config>> {
    let mut config = Config::default();
    let args: Vec<String> = env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                return Ok(None);
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).context("--seed requires a value")?;
                config.seed = value.parse().context("--seed must be an integer")?;
            }
            "--output" => {
                i += 1;
                let value = args.get(i).context("--output requires a value")?;
                config.output_file = value.clone();
            }
            other => {
                anyhow::bail!("Unknown argument: {other} (try --help)");
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

fn main() -> Result<()> {
    env_logger::init();

    let Some(config) = parse_args()? else {
        return Ok(());
    };

    let dataset = generate_sample_dataset(config.seed);
    let json = dataset.to_json_pretty()?;
    fs::write(&config.output_file, json)
        .with_context(|| format!("Failed to write {}", config.output_file))?;

    let range = dataset.range();
    println!(
        "Wrote {}: {} countries, {} claims, years {}–{} (seed {})",
        config.output_file,
        dataset.countries().len(),
        dataset.claim_count(),
        range.start_year,
        range.end_year,
        config.seed
    );

    Ok(())
}
