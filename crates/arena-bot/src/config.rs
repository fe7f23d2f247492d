//! Configuration loading for the bot.
//!
//! Every tuning constant lives here and can be loaded from a TOML file.
//! Sections that are omitted fall back to their defaults.

use arena_state::{ItemKind, ObjectKind, Skill};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Complete bot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    /// Melee engagement settings
    #[serde(default)]
    pub combat: CombatConfig,
    /// Healing override settings
    #[serde(default)]
    pub survival: SurvivalConfig,
    /// Inventory caps that gate item pickup
    #[serde(default)]
    pub inventory: InventoryCaps,
    /// Skill point allocation weights
    #[serde(default)]
    pub progression: SkillWeights,
    /// Target priority policy
    #[serde(default)]
    pub targeting: TargetingConfig,
    /// Speech flavor settings
    #[serde(default)]
    pub flavor: FlavorConfig,
}

impl BotConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Toml)
    }

    /// Returns the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::TomlSerialize)
    }

    /// Rejects values that would silently skew decisions.
    ///
    /// Skill weights are checked when the [`SkillSelector`] is built.
    ///
    /// [`SkillSelector`]: crate::progression::SkillSelector
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.survival.low_health_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold { value: threshold });
        }

        let range = self.combat.attack_range;
        if !(range.is_finite() && range > 0.0) {
            return Err(ConfigError::InvalidAttackRange { value: range });
        }

        Ok(())
    }
}

/// Melee engagement configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Targets strictly closer than this are attacked
    pub attack_range: f64,
    /// Kinds that may be attacked in melee
    pub engageable_kinds: Vec<ObjectKind>,
}

impl CombatConfig {
    pub fn is_engageable(&self, kind: ObjectKind) -> bool {
        self.engageable_kinds.contains(&kind)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            attack_range: 125.0,
            engageable_kinds: vec![
                ObjectKind::Wolf,
                ObjectKind::Ghoul,
                ObjectKind::Minotaur,
                ObjectKind::Tiny,
                ObjectKind::Chest,
            ],
        }
    }
}

/// Healing override configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalConfig {
    /// A big potion is used when health / max_health drops below this
    pub low_health_threshold: f64,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self {
            low_health_threshold: 0.51,
        }
    }
}

/// Maximum carried count per stackable item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryCaps {
    pub big_potion: u32,
    pub speed_zapper: u32,
    pub ring: u32,
}

impl InventoryCaps {
    /// Cap for a stackable kind, `None` for kinds without a counter.
    pub fn cap_for(&self, kind: ItemKind) -> Option<u32> {
        match kind {
            ItemKind::BigPotion => Some(self.big_potion),
            ItemKind::SpeedZapper => Some(self.speed_zapper),
            ItemKind::Ring => Some(self.ring),
            ItemKind::Chest | ItemKind::Coin | ItemKind::PowerUp => None,
        }
    }
}

impl Default for InventoryCaps {
    fn default() -> Self {
        Self {
            big_potion: 6,
            speed_zapper: 5,
            ring: 5,
        }
    }
}

/// Relative weights for skill point redemption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillWeights {
    pub attack: f64,
    pub health: f64,
    pub speed: f64,
}

impl SkillWeights {
    pub fn weight(&self, skill: Skill) -> f64 {
        match skill {
            Skill::Attack => self.attack,
            Skill::Health => self.health,
            Skill::Speed => self.speed,
        }
    }

    /// Skill/weight pairs in a fixed order.
    pub fn entries(&self) -> [(Skill, f64); 3] {
        [
            (Skill::Attack, self.attack),
            (Skill::Health, self.health),
            (Skill::Speed, self.speed),
        ]
    }
}

impl Default for SkillWeights {
    fn default() -> Self {
        Self {
            attack: 5.0,
            health: 3.0,
            speed: 2.0,
        }
    }
}

/// How the target is chosen among eligible candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPolicy {
    /// Nearest candidate overall, items and enemies pooled together
    #[default]
    FlatNearest,
    /// Nearest chest if any exists, otherwise the nearer of best item and best enemy
    ChestFirst,
}

/// Target selection configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    pub policy: TargetPolicy,
}

/// Speech flavor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlavorConfig {
    /// Emit `speak` lines for heal and attack cues
    pub enabled: bool,
    /// Optional TOML phrase book replacing the built-in phrases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrases_path: Option<PathBuf>,
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Error serializing config to TOML
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    /// Skill weights must be positive and finite
    #[error("skill weight for {skill} must be positive, got {weight}")]
    InvalidSkillWeight { skill: Skill, weight: f64 },
    /// Health threshold must lie within [0, 1]
    #[error("low health threshold must be within [0, 1], got {value}")]
    InvalidThreshold { value: f64 },
    /// Attack range must be positive and finite
    #[error("attack range must be positive, got {value}")]
    InvalidAttackRange { value: f64 },
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Arena bot configuration

[combat]
attack_range = 125.0
engageable_kinds = ["wolf", "ghoul", "minotaur", "tiny", "chest"]

[survival]
low_health_threshold = 0.51

[inventory]
big_potion = 6
speed_zapper = 5
ring = 5

[progression]
attack = 5.0
health = 3.0
speed = 2.0

[targeting]
# "flat_nearest" or "chest_first"
policy = "flat_nearest"

[flavor]
enabled = false
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BotConfig::default();

        assert_eq!(config.combat.attack_range, 125.0);
        assert_eq!(config.survival.low_health_threshold, 0.51);
        assert_eq!(config.inventory.big_potion, 6);
        assert_eq!(config.inventory.speed_zapper, 5);
        assert_eq!(config.inventory.ring, 5);
        assert_eq!(config.progression.weight(Skill::Attack), 5.0);
        assert_eq!(config.targeting.policy, TargetPolicy::FlatNearest);
        assert!(!config.flavor.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engageable_kinds_default() {
        let combat = CombatConfig::default();

        assert!(combat.is_engageable(ObjectKind::Wolf));
        assert!(combat.is_engageable(ObjectKind::Chest));
        assert!(!combat.is_engageable(ObjectKind::Coin));
        assert!(!combat.is_engageable(ObjectKind::Player));
    }

    #[test]
    fn test_cap_for_uncapped_kinds() {
        let caps = InventoryCaps::default();

        assert_eq!(caps.cap_for(ItemKind::BigPotion), Some(6));
        assert_eq!(caps.cap_for(ItemKind::Ring), Some(5));
        assert_eq!(caps.cap_for(ItemKind::Coin), None);
        assert_eq!(caps.cap_for(ItemKind::PowerUp), None);
        assert_eq!(caps.cap_for(ItemKind::Chest), None);
    }

    #[test]
    fn test_parse_config_from_toml() {
        let toml = r#"
            [combat]
            attack_range = 80.0

            [targeting]
            policy = "chest_first"

            [progression]
            attack = 1.0
        "#;

        let config = BotConfig::from_str(toml).unwrap();

        assert_eq!(config.combat.attack_range, 80.0);
        assert_eq!(config.targeting.policy, TargetPolicy::ChestFirst);
        assert_eq!(config.progression.attack, 1.0);
        // Unspecified values keep their defaults
        assert_eq!(config.progression.health, 3.0);
        assert_eq!(config.combat.engageable_kinds.len(), 5);
        assert_eq!(config.inventory.big_potion, 6);
    }

    #[test]
    fn test_default_config_toml_parses() {
        let config = BotConfig::from_str(&default_config_toml()).unwrap();

        assert_eq!(config.combat.attack_range, 125.0);
        assert_eq!(config.survival.low_health_threshold, 0.51);
        assert_eq!(config.combat.engageable_kinds, CombatConfig::default().engageable_kinds);
    }

    #[test]
    fn test_config_to_toml() {
        let toml = BotConfig::default().to_toml().unwrap();

        assert!(toml.contains("[combat]"));
        assert!(toml.contains("[progression]"));
        assert!(toml.contains("flat_nearest"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[survival]\nlow_health_threshold = 0.3").unwrap();

        let config = BotConfig::from_file(file.path()).unwrap();
        assert_eq!(config.survival.low_health_threshold, 0.3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BotConfig::from_file(Path::new("/nonexistent/bot.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_negative_weight_rejected_by_selector() {
        let config = BotConfig::from_str("[progression]\nhealth = -1.0").unwrap();
        assert!(matches!(
            crate::progression::SkillSelector::new(&config.progression),
            Err(ConfigError::InvalidSkillWeight { skill: Skill::Health, .. })
        ));
    }

    #[test]
    fn test_bad_threshold_and_range_rejected() {
        let config = BotConfig::from_str("[survival]\nlow_health_threshold = 1.5").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { .. })
        ));

        let config = BotConfig::from_str("[combat]\nattack_range = 0.0").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAttackRange { .. })
        ));
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let err = BotConfig::from_str("[targeting]\npolicy = \"random\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
