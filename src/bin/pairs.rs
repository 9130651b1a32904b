//! Builds training pairs from a game log and prints a sampled batch.
//!
//! Usage:
//!   pairs [OPTIONS] [LOG]
//!
//! Options:
//!   --batch N       Pairs to sample (default: from config, 32)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --sorted        Keep sampled pairs in log order
//!   --config FILE   TOML export settings
//!   --quiet         Only log warnings and errors
//!
//! Each sampled pair is printed as two action lines, before and after,
//! followed by a blank line.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use env_logger::Env;
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use battlelog::config::ExportConfig;
use battlelog::dataset::{read_action_states, TrainingDataset};

type BoxError = Box<dyn std::error::Error>;

fn main() -> Result<(), BoxError> {
    let args: Vec<String> = env::args().collect();
    let mut input: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut batch: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut sorted = false;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--batch" => {
                i += 1;
                batch = Some(parse(&args, i, "--batch")?);
            }
            "--seed" => {
                i += 1;
                seed = Some(parse(&args, i, "--seed")?);
            }
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("missing value for --config")?;
                config_path = Some(path.into());
            }
            "--sorted" => sorted = true,
            "--quiet" => quiet = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
            path => input = Some(path.into()),
        }
        i += 1;
    }

    let filter = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

    let config = match &config_path {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };
    let batch = batch.unwrap_or(config.batch_size);
    let seed = seed.unwrap_or(config.seed);

    let reader: Box<dyn BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };
    let items = read_action_states(reader)?;
    let dataset = TrainingDataset::from_items(items);
    info!(
        "dataset: {} pairs, inferred board {}x{}",
        dataset.len(),
        dataset.board_width(),
        dataset.board_height()
    );

    let batch = if batch > dataset.len() {
        warn!("batch {} exceeds {} available pairs, using all", batch, dataset.len());
        dataset.len()
    } else {
        batch
    };

    let mut rng = if seed != 0 {
        SmallRng::seed_from_u64(seed)
    } else {
        SmallRng::from_entropy()
    };
    let sample = if sorted {
        dataset.sample_sorted(batch, &mut rng)
    } else {
        dataset.sample(batch, &mut rng)
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for (current, next) in sample.pairs() {
        writeln!(out, "{}", current.action().encode())?;
        writeln!(out, "{}", next.action().encode())?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Parses the value following a flag.
fn parse<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String> {
    args.get(i)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| format!("invalid or missing value for {}", flag))
}

fn print_usage() {
    eprintln!("Usage: pairs [OPTIONS] [LOG]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --batch N       Pairs to sample (default: from config, 32)");
    eprintln!("  --seed N        Random seed, 0 for entropy (default: 0)");
    eprintln!("  --sorted        Keep sampled pairs in log order");
    eprintln!("  --config FILE   TOML export settings");
    eprintln!("  --quiet         Only log warnings and errors");
    eprintln!("  --help          Show this help");
}
