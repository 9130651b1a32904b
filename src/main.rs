//! Converts recorded round snapshots into a tab-separated training log.
//!
//! Input is JSONL, one round snapshot per line. Output is the multi-schema
//! log written by `GameLogWriter`.
//!
//! Usage:
//!   battlelog [OPTIONS]
//!
//! Options:
//!   --input FILE    JSONL round snapshots (default: stdin)
//!   --output FILE   Log file path (default: stdout)
//!   --config FILE   TOML export settings
//!   --no-headers    Do not write schema header lines
//!   --no-board      Do not write the board grid
//!   --quiet         Only log warnings and errors

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use env_logger::Env;
use log::info;

use battlelog::config::ExportConfig;
use battlelog::gamelog::GameLogWriter;
use battlelog::snapshot::RoundSnapshot;

type BoxError = Box<dyn std::error::Error>;

fn main() -> Result<(), BoxError> {
    let args: Vec<String> = env::args().collect();
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut no_headers = false;
    let mut no_board = false;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input = Some(value(&args, i, "--input")?.into());
            }
            "--output" => {
                i += 1;
                output = Some(value(&args, i, "--output")?.into());
            }
            "--config" => {
                i += 1;
                config_path = Some(value(&args, i, "--config")?.into());
            }
            "--no-headers" => no_headers = true,
            "--no-board" => no_board = true,
            "--quiet" => quiet = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let filter = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

    let mut config = match &config_path {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };
    if no_headers {
        config.write_headers = false;
    }
    if no_board {
        config.include_board = false;
    }

    let reader: Box<dyn BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };
    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut log = GameLogWriter::new(writer, config);
    let mut rounds = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let round: RoundSnapshot = serde_json::from_str(&line)
            .map_err(|e| format!("input line {}: {}", idx + 1, e))?;
        log.write_round(&round)?;
        rounds += 1;
    }
    log.flush()?;

    info!("wrote {} rounds, {} lines", rounds, log.lines_written());
    Ok(())
}

/// Returns the value following a flag.
fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("missing value for {}", flag))
}

fn print_usage() {
    eprintln!("Usage: battlelog [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input FILE    JSONL round snapshots (default: stdin)");
    eprintln!("  --output FILE   Log file path (default: stdout)");
    eprintln!("  --config FILE   TOML export settings");
    eprintln!("  --no-headers    Do not write schema header lines");
    eprintln!("  --no-board      Do not write the board grid");
    eprintln!("  --quiet         Only log warnings and errors");
    eprintln!("  --help          Show this help");
}
