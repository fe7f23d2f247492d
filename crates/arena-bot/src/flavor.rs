//! Speech flavor lines.
//!
//! Purely cosmetic: a provider may return a line to `speak` when the bot heals
//! or engages. Decisions never depend on what it says.

use std::fmt;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Line spoken when a cue has no phrases configured.
pub const FALLBACK_PHRASE: &str = "404 Action Cry Not Found!";

/// Moments in a tick that can trigger a speech line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlavorCue {
    Heal,
    Attack,
}

impl FlavorCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlavorCue::Heal => "heal",
            FlavorCue::Attack => "attack",
        }
    }
}

impl fmt::Display for FlavorCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of speech lines.
pub trait FlavorProvider: fmt::Debug + Send + Sync {
    /// Returns a line for `cue`, or `None` to stay quiet.
    fn phrase(&self, cue: FlavorCue, rng: &mut dyn RngCore) -> Option<String>;
}

/// Provider that never speaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl FlavorProvider for Silent {
    fn phrase(&self, _cue: FlavorCue, _rng: &mut dyn RngCore) -> Option<String> {
        None
    }
}

/// Phrase lists keyed by cue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhraseBook {
    #[serde(default)]
    pub heal: Vec<String>,
    #[serde(default)]
    pub attack: Vec<String>,
}

impl PhraseBook {
    /// Loads a phrase book from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, FlavorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses a phrase book from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, FlavorError> {
        toml::from_str(content).map_err(FlavorError::Toml)
    }

    pub fn phrases(&self, cue: FlavorCue) -> &[String] {
        match cue {
            FlavorCue::Heal => &self.heal,
            FlavorCue::Attack => &self.attack,
        }
    }
}

impl FlavorProvider for PhraseBook {
    fn phrase(&self, cue: FlavorCue, rng: &mut dyn RngCore) -> Option<String> {
        let line = self
            .phrases(cue)
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_PHRASE.to_string());
        Some(line)
    }
}

/// Built-in phrases used when no phrase file is configured.
pub fn default_phrases() -> PhraseBook {
    PhraseBook {
        heal: vec![
            "Glug glug, back in the fight!".to_string(),
            "Not today!".to_string(),
            "Potion time.".to_string(),
        ],
        attack: vec![
            "Have at you!".to_string(),
            "Swing first, ask later!".to_string(),
            "For the loot!".to_string(),
        ],
    }
}

/// Errors that can occur while loading phrases.
#[derive(Debug, Error)]
pub enum FlavorError {
    /// IO error reading phrase file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
