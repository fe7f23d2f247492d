//! Tick runner: feeds snapshots to the bot and prints its moves.
//!
//! Input is either one JSON snapshot document or JSON Lines with one snapshot
//! per line. Output is one JSON move list per snapshot, one per line. A
//! snapshot that fails to parse or validate is logged and answered with an
//! empty list, so later ticks are unaffected.

use std::io::{self, Read, Write};
use std::path::Path;

use arena_bot::{Bot, BotError};
use arena_state::{LevelData, Move};
use rand::Rng;
use thiserror::Error;

/// Errors that can occur while running ticks.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// IO error reading snapshots or writing moves
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Error building the bot
    #[error("Bot error: {0}")]
    Bot(#[from] BotError),
    /// Error serializing a move list
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads the whole snapshot input. `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>) -> Result<String, RunnerError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Splits input into one raw document per tick.
///
/// Input that parses as a single JSON value is one (possibly pretty-printed)
/// document; anything else is JSON Lines, one tick per non-empty line.
pub fn split_snapshots(input: &str) -> Vec<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return vec![trimmed];
    }

    trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Builds the bot from a TOML file, or with defaults when no path is given.
pub fn build_bot(config: Option<&Path>) -> Result<Bot, RunnerError> {
    let bot = match config {
        Some(path) => Bot::from_config_file(path)?,
        None => Bot::with_defaults(),
    };
    Ok(bot)
}

/// Decides one tick from a raw snapshot document.
///
/// Invalid snapshots yield an empty move list.
pub fn decide_document<R: Rng>(bot: &Bot, document: &str, rng: &mut R) -> Vec<Move> {
    match LevelData::parse_validated(document) {
        Ok(level) => bot.decide_with_rng(&level, rng),
        Err(e) => {
            tracing::error!("Dropping tick: {}", e);
            Vec::new()
        }
    }
}

/// Serializes a move list, compact or pretty.
pub fn format_moves(moves: &[Move], pretty: bool) -> Result<String, RunnerError> {
    let json = if pretty {
        serde_json::to_string_pretty(moves)?
    } else {
        serde_json::to_string(moves)?
    };
    Ok(json)
}

/// Runs every snapshot in `input` through the bot, writing one move list per
/// tick to `out`. Returns the number of ticks processed.
pub fn run_ticks<R: Rng, W: Write>(
    bot: &Bot,
    input: &str,
    rng: &mut R,
    out: &mut W,
    pretty: bool,
) -> Result<usize, RunnerError> {
    let documents = split_snapshots(input);

    for (tick, document) in documents.iter().enumerate() {
        let moves = decide_document(bot, document, rng);
        tracing::debug!("Tick {}: {} moves", tick, moves.len());
        writeln!(out, "{}", format_moves(&moves, pretty)?)?;
    }

    out.flush()?;
    tracing::info!("Processed {} ticks", documents.len());
    Ok(documents.len())
}
