//! Move commands sent back to the game server.
//!
//! A move list is a JSON array mixing bare tags and single-key objects:
//!
//! ```text
//! [
//!   {"redeem_skill_point": "attack"},
//!   "attack",
//!   "shield",
//!   {"move_to": {"x": 10.0, "y": 4.0}},
//!   {"debug_info": {"message": "Current Target", "target_id": "e1"}}
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ObjectKind, Position};

/// Consumables the player can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsableItem {
    Ring,
    SpeedZapper,
    BigPotion,
}

/// Skill categories a skill point can be redeemed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Attack,
    Health,
    Speed,
}

impl Skill {
    /// Returns all skill variants.
    pub fn all() -> &'static [Skill] {
        &[Skill::Attack, Skill::Health, Skill::Speed]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Attack => "attack",
            Skill::Health => "health",
            Skill::Speed => "speed",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic payload shown in the game client's debug overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub message: String,
    /// Always serialized; `null` when nothing is targeted.
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<ObjectKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_position: Option<Position>,
}

impl DebugInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            target_id: None,
            target_type: None,
            target_position: None,
        }
    }

    pub fn with_target(
        mut self,
        id: impl Into<String>,
        kind: ObjectKind,
        position: Position,
    ) -> Self {
        self.target_id = Some(id.into());
        self.target_type = Some(kind);
        self.target_position = Some(position);
        self
    }
}

/// A single primitive command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    Attack,
    Special,
    Dash,
    Shield,
    MoveTo(Position),
    Speak(String),
    Use(UsableItem),
    RedeemSkillPoint(Skill),
    DebugInfo(DebugInfo),
}

impl Move {
    pub fn is_movement(&self) -> bool {
        matches!(self, Move::MoveTo(_))
    }

    pub fn is_combat(&self) -> bool {
        matches!(self, Move::Attack | Move::Shield | Move::Special)
    }
}
