//! Per-tick world snapshot.
//!
//! The server posts one [`LevelData`] document per tick. Parsing goes through
//! serde; [`LevelData::validate`] then checks the numeric invariants the
//! decision core relies on, so the core never sees a malformed snapshot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::{Enemy, Hazard, Item, OwnPlayer, Player};
use crate::kind::GameState;
use crate::Position;

/// Match metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameInfo {
    #[serde(default)]
    pub friendly_fire: bool,
    #[serde(default)]
    pub game_type: String,
    #[serde(default)]
    pub map: String,
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub state: GameState,
    #[serde(default)]
    pub time_remaining_s: f64,
    #[serde(default)]
    pub latency: f64,
}

/// Scoreboard line for one player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStat {
    pub id: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub coins: u32,
    #[serde(default)]
    pub kd_ratio: f64,
    #[serde(default)]
    pub kill_streak: u32,
    #[serde(default)]
    pub overclocks: u32,
    #[serde(default)]
    pub xps: Option<f64>,
    #[serde(default)]
    pub wolf_kills: u32,
    #[serde(default)]
    pub ghoul_kills: u32,
    #[serde(default)]
    pub tiny_kills: u32,
    #[serde(default)]
    pub minotaur_kills: u32,
    #[serde(default)]
    pub player_kills: u32,
    #[serde(default)]
    pub self_destructs: u32,
}

/// Complete world state for one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub game_info: GameInfo,
    pub own_player: OwnPlayer,
    pub items: Vec<Item>,
    pub enemies: Vec<Enemy>,
    pub players: Vec<Player>,
    pub obstacles: Vec<Position>,
    pub hazards: Vec<Hazard>,
    #[serde(default)]
    pub stats: Option<Vec<PlayerStat>>,
}

impl LevelData {
    /// Creates an otherwise empty snapshot around the own player.
    pub fn new(own_player: OwnPlayer) -> Self {
        Self {
            game_info: GameInfo::default(),
            own_player,
            items: Vec::new(),
            enemies: Vec::new(),
            players: Vec::new(),
            obstacles: Vec::new(),
            hazards: Vec::new(),
            stats: None,
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_enemies(mut self, enemies: Vec<Enemy>) -> Self {
        self.enemies = enemies;
        self
    }

    /// Parses a snapshot without validating it.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::Json)
    }

    /// Parses and validates a snapshot.
    pub fn parse_validated(json: &str) -> Result<Self, SnapshotError> {
        let snapshot = Self::from_json(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Serializes the snapshot to a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Checks the numeric invariants the decision core assumes.
    ///
    /// - the own player's health is finite and max health is positive
    /// - every position used for distance math is finite
    /// - any health value present on an enemy or item is finite
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let own = &self.own_player.player;
        if !(own.max_health.is_finite() && own.max_health > 0.0) {
            return Err(SnapshotError::InvalidMaxHealth {
                max_health: own.max_health,
            });
        }
        if !own.health.is_finite() {
            return Err(SnapshotError::NonFiniteHealth {
                entity: own.id.clone(),
            });
        }
        if !own.position.is_finite() {
            return Err(SnapshotError::NonFinitePosition {
                entity: own.id.clone(),
            });
        }

        for item in &self.items {
            if !item.position.is_finite() {
                return Err(SnapshotError::NonFinitePosition {
                    entity: item.id.clone(),
                });
            }
            if matches!(item.health, Some(h) if !h.is_finite()) {
                return Err(SnapshotError::NonFiniteHealth {
                    entity: item.id.clone(),
                });
            }
        }

        for enemy in &self.enemies {
            if !enemy.position.is_finite() {
                return Err(SnapshotError::NonFinitePosition {
                    entity: enemy.id.clone(),
                });
            }
            if matches!(enemy.health, Some(h) if !h.is_finite()) {
                return Err(SnapshotError::NonFiniteHealth {
                    entity: enemy.id.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Errors raised while ingesting a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The document is not valid snapshot JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Own player max health must be a positive number
    #[error("own player max_health must be positive, got {max_health}")]
    InvalidMaxHealth { max_health: f64 },
    /// A health value is NaN or infinite
    #[error("entity {entity} has a non-finite health value")]
    NonFiniteHealth { entity: String },
    /// A position coordinate is NaN or infinite
    #[error("entity {entity} has a non-finite position")]
    NonFinitePosition { entity: String },
}
