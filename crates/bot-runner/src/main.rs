//! Arena bot tick runner
//!
//! Reads snapshots and prints one JSON move list per tick.
//!
//! Examples:
//!   arena_bot --snapshot ticks.jsonl --seed 7
//!   arena_bot --print-default-config > bot.toml
//!   cat tick.json | arena_bot --config bot.toml --pretty

use anyhow::{Context, Result};
use arena_bot::default_config_toml;
use bot_runner::{build_bot, read_input, run_ticks};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Arena bot tick runner
#[derive(Parser, Debug)]
#[command(name = "arena_bot")]
#[command(about = "Decides arena bot moves from game snapshots")]
struct Args {
    /// TOML bot configuration (built-in defaults if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Snapshot input, a JSON document or JSON Lines; `-` reads stdin
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Random seed for reproducible decisions
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,

    /// Pretty-print move lists
    #[arg(long)]
    pretty: bool,
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return Ok(());
    }

    init_logging();

    let bot = build_bot(args.config.as_deref()).context("building bot")?;

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let input = read_input(args.snapshot.as_deref()).context("reading snapshots")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_ticks(&bot, &input, &mut rng, &mut out, args.pretty)?;

    Ok(())
}
