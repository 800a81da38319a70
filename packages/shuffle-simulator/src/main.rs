//! Shuffle simulator CLI - runs many shuffle streaks in memory.
//!
//! Useful for checking selection fairness and tip cadence against a catalog
//! without driving the interactive app.

mod output;
mod simulator;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use nolza::domain::derive_streak_seed;
use nolza::{GameCatalog, TipSchedule};
use output::OutputWriter;
use simulator::{Simulator, StreakResult};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "shuffle-simulator")]
#[command(about = "In-memory shuffle streak simulator")]
struct Args {
    /// Number of streaks to simulate
    #[arg(short, long, default_value = "100")]
    streaks: u64,

    /// In-game shuffles per streak after the home shuffle
    #[arg(short, long, default_value = "24")]
    length: usize,

    /// Base seed; each streak derives its own seed from it
    #[arg(long)]
    seed: Option<u64>,

    /// Shuffles between safety tips, 0 disables
    #[arg(long, default_value = "4")]
    tip_every: u32,

    /// JSON catalog to use instead of the bundled games
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = match &args.catalog {
        Some(path) => GameCatalog::from_path(path)?,
        None => GameCatalog::builtin()?,
    };
    let simulator = Simulator::new(catalog, TipSchedule::new(args.tip_every));
    let base_seed = args.seed.unwrap_or_else(rand::random);
    info!(
        streaks = args.streaks,
        length = args.length,
        base_seed,
        games = simulator.catalog_len(),
        "starting simulation"
    );

    let mut output_writer = OutputWriter::new(&args.output_dir)?;

    let start = Instant::now();
    let mut results = Vec::with_capacity(args.streaks as usize);
    for streak_no in 1..=args.streaks {
        let seed = derive_streak_seed(base_seed, streak_no);
        let result = simulator.run_streak(streak_no, seed, args.length);
        if let Err(e) = output_writer.write_streak(&result) {
            warn!("Failed to write results for streak {}: {}", streak_no, e);
        }
        results.push(result);
    }
    let elapsed = start.elapsed();

    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    print_summary(&results, simulator.catalog_len(), base_seed, elapsed);
    println!("Detailed results: {}", jsonl_path.display());
    println!("Summary CSV: {}", csv_path.display());
    Ok(())
}

fn print_summary(results: &[StreakResult], catalog_len: usize, base_seed: u64, elapsed: std::time::Duration) {
    println!("\n=== Shuffle Simulation Summary ===");
    println!("Streaks: {}  (base seed {})", results.len(), base_seed);
    println!("Catalog size: {}", catalog_len);
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }

    let repeats: usize = results.iter().map(|r| r.immediate_repeats).sum();
    let tips: usize = results.iter().map(|r| r.tips_at.len()).sum();
    let covered: Vec<usize> = results.iter().filter_map(|r| r.full_coverage_at).collect();

    println!("Immediate repeats: {}", repeats);
    println!("Tips shown: {}", tips);
    println!(
        "Streaks reaching full coverage: {}/{}",
        covered.len(),
        results.len()
    );
    if !covered.is_empty() {
        let avg = covered.iter().sum::<usize>() as f64 / covered.len() as f64;
        println!("Average visits to full coverage: {:.2}", avg + 1.0);
    }
}
