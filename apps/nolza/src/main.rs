//! Nolza terminal front end.
//!
//! Reads one command per line from stdin and renders the resulting screen.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use nolza::services::screens;
use nolza::{build_state, ShuffleConfig};

#[derive(Parser)]
#[command(name = "nolza")]
#[command(about = "Browse and shuffle party games from the terminal")]
struct Args {
    /// Seed for reproducible shuffles (overrides NOLZA_SHUFFLE_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Shuffles between safety tips, 0 disables (overrides NOLZA_TIP_EVERY)
    #[arg(long)]
    tip_every: Option<u32>,

    /// JSON catalog to use instead of the bundled games (overrides NOLZA_CATALOG_PATH)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() {
    nolza::telemetry::init_tracing();
    let args = Args::parse();

    let config = match ShuffleConfig::from_env() {
        Ok(config) => config
            .with_seed(args.seed)
            .with_tip_every(args.tip_every)
            .with_catalog_path(args.catalog),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let state = match build_state().with_config(config).build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to load catalog: {e}");
            std::process::exit(1);
        }
    };

    let controller = state.shuffle_controller();
    if let Err(e) = screens::run(&controller, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
