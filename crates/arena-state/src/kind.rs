//! Entity kinds and small protocol enums.
//!
//! Every kind is a closed set. The wire format uses snake_case strings
//! (`"big_potion"`, `"lightning_storm"`), except [`GameState`] which the
//! server sends in upper case.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enemy kinds roaming the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Wolf,
    Ghoul,
    Minotaur,
    Tiny,
}

/// Item kinds lying on the arena floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    BigPotion,
    Ring,
    SpeedZapper,
    Chest,
    Coin,
    PowerUp,
}

/// Hazard kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    Bomb,
    Icicle,
    LightningStorm,
}

/// The single kind carried by players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    #[default]
    Player,
}

/// Flat union of every entity kind.
///
/// Used wherever entities of different families are handled together:
/// target candidates, debug payloads and configured kind lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Player,
    Wolf,
    Ghoul,
    Minotaur,
    Tiny,
    BigPotion,
    Ring,
    SpeedZapper,
    Chest,
    Coin,
    PowerUp,
    Bomb,
    Icicle,
    LightningStorm,
}

impl ObjectKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Player => "player",
            ObjectKind::Wolf => "wolf",
            ObjectKind::Ghoul => "ghoul",
            ObjectKind::Minotaur => "minotaur",
            ObjectKind::Tiny => "tiny",
            ObjectKind::BigPotion => "big_potion",
            ObjectKind::Ring => "ring",
            ObjectKind::SpeedZapper => "speed_zapper",
            ObjectKind::Chest => "chest",
            ObjectKind::Coin => "coin",
            ObjectKind::PowerUp => "power_up",
            ObjectKind::Bomb => "bomb",
            ObjectKind::Icicle => "icicle",
            ObjectKind::LightningStorm => "lightning_storm",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EnemyKind> for ObjectKind {
    fn from(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Wolf => ObjectKind::Wolf,
            EnemyKind::Ghoul => ObjectKind::Ghoul,
            EnemyKind::Minotaur => ObjectKind::Minotaur,
            EnemyKind::Tiny => ObjectKind::Tiny,
        }
    }
}

impl From<ItemKind> for ObjectKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::BigPotion => ObjectKind::BigPotion,
            ItemKind::Ring => ObjectKind::Ring,
            ItemKind::SpeedZapper => ObjectKind::SpeedZapper,
            ItemKind::Chest => ObjectKind::Chest,
            ItemKind::Coin => ObjectKind::Coin,
            ItemKind::PowerUp => ObjectKind::PowerUp,
        }
    }
}

impl From<HazardKind> for ObjectKind {
    fn from(kind: HazardKind) -> Self {
        match kind {
            HazardKind::Bomb => ObjectKind::Bomb,
            HazardKind::Icicle => ObjectKind::Icicle,
            HazardKind::LightningStorm => ObjectKind::LightningStorm,
        }
    }
}

impl From<PlayerKind> for ObjectKind {
    fn from(_: PlayerKind) -> Self {
        ObjectKind::Player
    }
}

/// Power-up carried by a `power_up` item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    Freeze,
    Bomb,
    Shockwave,
}

/// Facing direction of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Right,
    Left,
}

/// Lifecycle of a hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardStatus {
    #[default]
    Idle,
    Active,
    Charging,
}

/// Match lifecycle as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    #[default]
    Waiting,
    Starting,
    Started,
    Ending,
    Ended,
    MatchCompleted,
}
