//! Shared world-state and move types for the arena bot.
//!
//! This crate contains pure data structures with no decision logic. It mirrors
//! the game server's JSON protocol: a [`LevelData`] snapshot arrives once per
//! tick, and a list of [`Move`] values goes back.

pub mod entity;
pub mod kind;
pub mod moves;
pub mod position;
pub mod snapshot;

// Re-export position types
pub use position::{distance, Position};

// Re-export kind enums
pub use kind::{
    Direction, EnemyKind, GameState, HazardKind, HazardStatus, ItemKind, ObjectKind, PlayerKind,
    PowerUpKind,
};

// Re-export entity types
pub use entity::{
    Collision, Enemy, Hazard, Item, ItemInventory, Levelling, OwnPlayer, Player, StatusFlags,
};

// Re-export move types
pub use moves::{DebugInfo, Move, Skill, UsableItem};

// Re-export snapshot types
pub use snapshot::{GameInfo, LevelData, PlayerStat, SnapshotError};
