//! Generate a labelled Hex dataset from random self-play.
//!
//! Writes the dataset with bincode and the model hyperparameters as JSON
//! next to it, so a training script can pick both up.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hex_graph::{GraphEncoder, ModelConfig, SelfPlayConfig, SelfPlayGenerator};
use log::LevelFilter;

/// Generate random self-play data for Hex
#[derive(Parser, Debug)]
#[command(name = "hex-datagen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Board side length
    #[arg(short = 'n', long, default_value_t = 7)]
    size: usize,

    /// Number of games to play
    #[arg(short, long, default_value_t = 2000)]
    games: usize,

    /// Seed for the random stream
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Keep games that end without a winner
    #[arg(long)]
    keep_undecided: bool,

    /// Output path for the dataset
    #[arg(short, long, default_value = "hex_dataset.bin")]
    output: PathBuf,

    /// Clause count recorded in the model config
    #[arg(long, default_value_t = 200)]
    clauses: usize,

    /// Threshold recorded in the model config
    #[arg(long, default_value_t = 50)]
    threshold: u32,

    /// Specificity recorded in the model config
    #[arg(long, default_value_t = 5.0)]
    specificity: f64,

    /// Log per-game details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    simple_logging::log_to_stderr(level);

    let model = ModelConfig::new(args.size)
        .with_clauses(args.clauses)
        .with_threshold(args.threshold)
        .with_specificity(args.specificity);
    model.validate().context("invalid model config")?;

    let config = SelfPlayConfig::new()
        .with_board_size(args.size)
        .with_games(args.games)
        .with_seed(args.seed)
        .with_keep_undecided(args.keep_undecided);
    let generator = SelfPlayGenerator::new(config).context("invalid self-play config")?;
    let dataset = generator.generate().context("self-play failed")?;

    let stats = dataset.stats();
    log::info!(
        "{} records from {} games, {:.1}% positive, {} unique positions",
        stats.records,
        stats.games,
        100.0 * stats.positive_rate(),
        stats.unique_positions
    );
    let signature = GraphEncoder::new(args.size).signature();
    log::info!(
        "graph signature: {} nodes, {} edges, {} symbols",
        signature.node_count,
        signature.edge_count,
        signature.symbol_count
    );

    dataset
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let config_path = args.output.with_extension("json");
    model
        .save(&config_path)
        .with_context(|| format!("writing {}", config_path.display()))?;
    log::info!("model config written to {}", config_path.display());

    Ok(())
}
