//! World entities: enemies, items, hazards and players.
//!
//! Field names follow the game server's JSON. Identity, position and kind are
//! required on every entity; cosmetic fields default when the server omits
//! them.

use serde::{Deserialize, Serialize};

use crate::kind::{Direction, EnemyKind, HazardKind, HazardStatus, ItemKind, PlayerKind, PowerUpKind};
use crate::Position;

/// Transient status flags shared by every character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusFlags {
    #[serde(default)]
    pub is_attacking: bool,
    #[serde(default)]
    pub is_frozen: bool,
    #[serde(default)]
    pub is_pushed: bool,
    #[serde(default)]
    pub is_zapped: bool,
}

/// A hostile creature.
///
/// Health is optional: the server occasionally sends enemies before their
/// stats are populated, and those are never treated as targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: EnemyKind,
    #[serde(default)]
    pub health: Option<f64>,
    #[serde(default)]
    pub max_health: f64,
    #[serde(default)]
    pub attack_damage: f64,
    #[serde(default)]
    pub direction: Direction,
    #[serde(flatten)]
    pub status: StatusFlags,
    #[serde(default)]
    pub points: f64,
}

impl Enemy {
    /// Creates an enemy with the given health and otherwise neutral stats.
    pub fn new(id: impl Into<String>, kind: EnemyKind, position: Position, health: f64) -> Self {
        Self {
            id: id.into(),
            position,
            kind,
            health: Some(health),
            max_health: health,
            attack_damage: 0.0,
            direction: Direction::default(),
            status: StatusFlags::default(),
            points: 0.0,
        }
    }

    /// Alive means a health value is present and strictly positive.
    pub fn is_alive(&self) -> bool {
        matches!(self.health, Some(health) if health > 0.0)
    }
}

/// Something lying on the arena floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default)]
    pub points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerUpKind>,
    /// Only attackable items (chests) carry health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
}

impl Item {
    pub fn new(id: impl Into<String>, kind: ItemKind, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
            kind,
            value: None,
            points: 0.0,
            power: None,
            health: None,
        }
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = Some(health);
        self
    }
}

/// An environmental hazard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: String,
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: HazardKind,
    #[serde(default)]
    pub status: HazardStatus,
    #[serde(default)]
    pub attack_damage: f64,
    #[serde(default)]
    pub owner_id: String,
}

/// Level and skill investment of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Levelling {
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub available_skill_points: u32,
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub health: u32,
}

/// Consumables carried by the own player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemInventory {
    pub big_potions: u32,
    pub speed_zappers: u32,
    pub rings: u32,
}

impl ItemInventory {
    pub fn new(big_potions: u32, speed_zappers: u32, rings: u32) -> Self {
        Self {
            big_potions,
            speed_zappers,
            rings,
        }
    }

    /// Current count for an item kind that is stored in the inventory.
    ///
    /// Returns `None` for kinds that are consumed on pickup (coins, chests,
    /// power-ups) and therefore have no counter.
    pub fn count(&self, kind: ItemKind) -> Option<u32> {
        match kind {
            ItemKind::BigPotion => Some(self.big_potions),
            ItemKind::SpeedZapper => Some(self.speed_zappers),
            ItemKind::Ring => Some(self.rings),
            ItemKind::Chest | ItemKind::Coin | ItemKind::PowerUp => None,
        }
    }
}

/// A collision reported relative to the own player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collision {
    #[serde(rename = "type")]
    pub kind: String,
    pub relative_position: Position,
}

/// Any player in the match, including the bot itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub position: Position,
    #[serde(rename = "type", default)]
    pub kind: PlayerKind,
    pub health: f64,
    pub max_health: f64,
    #[serde(default)]
    pub attack_damage: f64,
    #[serde(default)]
    pub direction: Direction,
    #[serde(flatten)]
    pub status: StatusFlags,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub is_dashing: bool,
    #[serde(default)]
    pub levelling: Levelling,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub shield_raised: bool,
    #[serde(default)]
    pub special_equipped: String,
    #[serde(default)]
    pub speech: String,
    #[serde(default)]
    pub unleashing_shockwave: bool,
    #[serde(default)]
    pub is_overclocking: bool,
    #[serde(default)]
    pub has_health_regen: bool,
    #[serde(default)]
    pub base_speed: f64,
}

impl Player {
    pub fn new(id: impl Into<String>, position: Position, health: f64, max_health: f64) -> Self {
        Self {
            id: id.into(),
            position,
            kind: PlayerKind::Player,
            health,
            max_health,
            attack_damage: 0.0,
            direction: Direction::default(),
            status: StatusFlags::default(),
            points: 0.0,
            display_name: String::new(),
            is_dashing: false,
            levelling: Levelling::default(),
            score: 0.0,
            shield_raised: false,
            special_equipped: String::new(),
            speech: String::new(),
            unleashing_shockwave: false,
            is_overclocking: false,
            has_health_regen: false,
            base_speed: 0.0,
        }
    }
}

/// The player controlled by this bot, with inventory and ability readiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnPlayer {
    #[serde(flatten)]
    pub player: Player,
    #[serde(default)]
    pub collisions: Vec<Collision>,
    #[serde(default)]
    pub items: ItemInventory,
    #[serde(default)]
    pub is_cloaked: bool,
    #[serde(default)]
    pub is_colliding: bool,
    #[serde(default)]
    pub is_dash_ready: bool,
    #[serde(default)]
    pub is_shield_ready: bool,
    #[serde(default)]
    pub is_special_ready: bool,
    #[serde(default)]
    pub is_zap_ready: bool,
    #[serde(default)]
    pub overclock_duration: f64,
}

impl OwnPlayer {
    pub fn new(id: impl Into<String>, position: Position, health: f64, max_health: f64) -> Self {
        Self {
            player: Player::new(id, position, health, max_health),
            collisions: Vec::new(),
            items: ItemInventory::default(),
            is_cloaked: false,
            is_colliding: false,
            is_dash_ready: false,
            is_shield_ready: false,
            is_special_ready: false,
            is_zap_ready: false,
            overclock_duration: 0.0,
        }
    }

    pub fn with_inventory(mut self, items: ItemInventory) -> Self {
        self.items = items;
        self
    }

    pub fn with_skill_points(mut self, points: u32) -> Self {
        self.player.levelling.available_skill_points = points;
        self
    }

    pub fn id(&self) -> &str {
        &self.player.id
    }

    pub fn position(&self) -> Position {
        self.player.position
    }

    pub fn available_skill_points(&self) -> u32 {
        self.player.levelling.available_skill_points
    }

    /// Current health as a fraction of maximum health.
    pub fn health_ratio(&self) -> f64 {
        self.player.health / self.player.max_health
    }
}
