//! Port Day generator command line
//!
//! Usage:
//!   portday generate [--seed N] [--config FILE] [--json]   - Generate one day
//!   portday hash [--seed N] [--config FILE]                - Print determinism hashes
//!   portday verify [--seed N] [--config FILE] [--runs K]   - Re-run and compare hashes
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use portday_core::{generate_all, GenerationResult, GeneratorSettings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portday", about = "Deterministic port day generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RunArgs {
    /// Seed for the run; defaults to the settings file's seed policy
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// JSON settings file (seed, generation, pools)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one day and print a summary
    Generate {
        #[command(flatten)]
        run: RunArgs,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the determinism hashes of one day
    Hash {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Generate the same day repeatedly and compare hashes
    Verify {
        #[command(flatten)]
        run: RunArgs,

        /// Number of runs to compare
        #[arg(short, long, default_value_t = 3)]
        runs: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { run, json } => generate(&run, json),
        Commands::Hash { run } => hash(&run),
        Commands::Verify { run, runs } => verify(&run, runs),
    }
}

fn load_settings(run: &RunArgs) -> Result<(GeneratorSettings, i32)> {
    let settings = match &run.config {
        Some(path) => GeneratorSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => GeneratorSettings::default(),
    };
    let seed = run.seed.unwrap_or_else(|| settings.seed.run_seed());
    Ok((settings, seed))
}

fn run_once(settings: &GeneratorSettings, seed: i32) -> Result<GenerationResult> {
    generate_all(seed, &settings.generation, &settings.pools)
        .with_context(|| format!("Generation failed for seed {}", seed))
}

fn generate(run: &RunArgs, json: bool) -> Result<()> {
    let (settings, seed) = load_settings(run)?;
    let result = run_once(&settings, seed)?;

    if json {
        let text = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", text);
        return Ok(());
    }

    println!("Day generated with seed {}\n", result.seed());

    println!("Containers ({}):", result.containers().len());
    for container in result.containers() {
        println!("  {} zone={}", container, container.expected_zone_id());
    }

    println!("\nShips ({}):", result.ships().len());
    for ship in result.ships() {
        println!("  {} voyage={:.1}h", ship, ship.voyage_duration_hours());
    }

    println!("\nTask rule: {}", result.task_rule());
    println!("{}", result.placement().ui_instruction());
    println!("Draw checkpoints: {:?}", result.checkpoint_list());
    Ok(())
}

fn hash(run: &RunArgs) -> Result<()> {
    let (settings, seed) = load_settings(run)?;
    let result = run_once(&settings, seed)?;

    println!("seed:      {}", seed);
    println!("config:    {}", result.config_hash());
    println!("{}", result.determinism_report());
    Ok(())
}

fn verify(run: &RunArgs, runs: u32) -> Result<()> {
    if runs < 2 {
        bail!("verify needs at least 2 runs, got {}", runs);
    }

    let (settings, seed) = load_settings(run)?;
    let baseline = run_once(&settings, seed)?.determinism_report();

    for attempt in 2..=runs {
        let report = run_once(&settings, seed)?.determinism_report();
        let mismatches = report.mismatches(&baseline);
        if !mismatches.is_empty() {
            warn!(attempt, ?mismatches, "determinism check failed");
            bail!(
                "Run {} differs from run 1 for seed {}: {}",
                attempt,
                seed,
                mismatches.join(", ")
            );
        }
    }

    info!(seed, runs, pipeline = %baseline.pipeline_hash, "determinism verified");
    println!("OK: {} runs of seed {} match ({})", runs, seed, baseline.pipeline_hash);
    Ok(())
}
