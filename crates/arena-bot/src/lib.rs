//! Arena bot: per-tick decision making.
//!
//! The bot receives one [`LevelData`] snapshot per tick and answers with an
//! ordered list of [`Move`] commands. It keeps no state between ticks: each
//! call filters candidates, picks a target, and composes heal, combat,
//! movement and progression moves from that snapshot alone.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────┐   filter    ┌───────────┐   select   ┌────────┐   compose   ┌───────────┐
//! │ snapshot │ ──────────▶ │ candidates│ ─────────▶ │ target │ ──────────▶ │ Vec<Move> │
//! └──────────┘             └───────────┘            └────────┘             └───────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: Tuning constants loaded from TOML
//! - [`filter`]: Inventory-capped item and living-enemy filters
//! - [`targeting`]: Nearest-target selection policies
//! - [`progression`]: Weighted skill-point allocation
//! - [`flavor`]: Optional speech lines

pub mod config;
pub mod filter;
pub mod flavor;
pub mod progression;
pub mod targeting;

// Re-export config types
pub use config::{
    default_config_toml, BotConfig, CombatConfig, ConfigError, FlavorConfig, InventoryCaps,
    SkillWeights, SurvivalConfig, TargetPolicy, TargetingConfig,
};

// Re-export filter functions
pub use filter::{filter_alive_enemies, filter_pickable_items, is_pickable};

// Re-export targeting types
pub use targeting::{nearest, SelectedTarget, Target, TargetSelector};

// Re-export progression types
pub use progression::SkillSelector;

// Re-export flavor types
pub use flavor::{
    default_phrases, FlavorCue, FlavorError, FlavorProvider, PhraseBook, Silent, FALLBACK_PHRASE,
};

use std::path::Path;

use arena_state::{DebugInfo, LevelData, Move, UsableItem};
use rand::{Rng, RngCore};
use thiserror::Error;

/// Message attached to the trailing debug note of every move list.
pub const DEBUG_MESSAGE: &str = "Current Target";

/// Errors that can occur while building a [`Bot`].
#[derive(Debug, Error)]
pub enum BotError {
    /// Error loading or validating configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Error loading phrases
    #[error("Flavor error: {0}")]
    Flavor(#[from] FlavorError),
}

/// The decision core.
///
/// Immutable after construction, so one `Bot` can decide ticks from several
/// threads at once.
#[derive(Debug)]
pub struct Bot {
    /// Configuration settings
    config: BotConfig,
    /// Target selection policy
    selector: TargetSelector,
    /// Skill point allocation table
    skills: SkillSelector,
    /// Speech line source
    flavor: Box<dyn FlavorProvider>,
}

impl Bot {
    /// Creates a new bot, validating the configuration.
    pub fn new(config: BotConfig) -> Result<Self, BotError> {
        config.validate()?;

        let selector = TargetSelector::new(config.targeting.policy);
        let skills = SkillSelector::new(&config.progression)?;
        let flavor: Box<dyn FlavorProvider> = if config.flavor.enabled {
            match &config.flavor.phrases_path {
                Some(path) => Box::new(PhraseBook::from_file(path)?),
                None => Box::new(default_phrases()),
            }
        } else {
            Box::new(Silent)
        };

        tracing::info!(
            "Bot ready: policy={:?}, attack_range={}, flavor={}",
            config.targeting.policy,
            config.combat.attack_range,
            config.flavor.enabled
        );

        Ok(Self {
            config,
            selector,
            skills,
            flavor,
        })
    }

    /// Creates a bot from a configuration file.
    pub fn from_config_file(path: &Path) -> Result<Self, BotError> {
        let config = BotConfig::from_file(path)?;
        Self::new(config)
    }

    /// Creates a bot with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(BotConfig::default()).expect("Default config should always work")
    }

    /// Replaces the speech line source.
    pub fn with_flavor(mut self, flavor: Box<dyn FlavorProvider>) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Decides this tick's moves using the thread-local RNG.
    pub fn decide(&self, level: &LevelData) -> Vec<Move> {
        self.decide_with_rng(level, &mut rand::thread_rng())
    }

    /// Decides this tick's moves with a caller-provided RNG.
    ///
    /// Order of the returned list:
    /// 1. one skill redemption, if points are available
    /// 2. a big potion, if health is below the threshold
    /// 3. attack and shield, if the target is engageable and in range
    /// 4. a move towards the target, if there is one
    /// 5. the debug note, always last
    pub fn decide_with_rng<R: Rng>(&self, level: &LevelData, rng: &mut R) -> Vec<Move> {
        let own = &level.own_player;
        let mut moves = Vec::new();

        if own.available_skill_points() > 0 {
            let skill = self.skills.choose(rng);
            tracing::debug!(
                "Redeeming skill point into {} ({} available)",
                skill,
                own.available_skill_points()
            );
            moves.push(Move::RedeemSkillPoint(skill));
        }

        let ratio = own.health_ratio();
        // NaN compares false, so a broken ratio never counts as low
        if ratio < self.config.survival.low_health_threshold {
            tracing::debug!("Health ratio {:.2} below threshold, drinking potion", ratio);
            moves.push(Move::Use(UsableItem::BigPotion));
            self.push_flavor(&mut moves, FlavorCue::Heal, rng);
        }

        let items = filter_pickable_items(&level.items, &own.items, &self.config.inventory);
        let enemies = filter_alive_enemies(&level.enemies);
        let origin = own.position();

        let selected = self.selector.select(&origin, &items, &enemies);

        let mut debug = DebugInfo::new(DEBUG_MESSAGE);
        match selected {
            Some(SelectedTarget { target, distance }) => {
                tracing::debug!(
                    "Target {} ({}) at distance {:.1}",
                    target.id(),
                    target.kind(),
                    distance
                );

                if self.is_engageable(&target, distance) {
                    moves.push(Move::Attack);
                    moves.push(Move::Shield);
                    self.push_flavor(&mut moves, FlavorCue::Attack, rng);
                }

                moves.push(Move::MoveTo(target.position()));
                debug = debug.with_target(target.id(), target.kind(), target.position());
            }
            None => {
                tracing::debug!("no target found");
            }
        }

        moves.push(Move::DebugInfo(debug));
        moves
    }

    fn is_engageable(&self, target: &Target<'_>, distance: f64) -> bool {
        self.config.combat.is_engageable(target.kind())
            && target.has_positive_health()
            && distance < self.config.combat.attack_range
    }

    fn push_flavor<R: Rng>(&self, moves: &mut Vec<Move>, cue: FlavorCue, rng: &mut R) {
        let rng: &mut dyn RngCore = rng;
        if let Some(line) = self.flavor.phrase(cue, rng) {
            moves.push(Move::Speak(line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_state::{
        Enemy, EnemyKind, Item, ItemInventory, ItemKind, ObjectKind, OwnPlayer, Position, Skill,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn level(health: f64) -> LevelData {
        LevelData::new(OwnPlayer::new("me", Position::new(0.0, 0.0), health, 100.0))
    }

    fn decide(bot: &Bot, level: &LevelData) -> Vec<Move> {
        bot.decide_with_rng(level, &mut SmallRng::seed_from_u64(42))
    }

    #[derive(Debug)]
    struct Fixed(&'static str);

    impl FlavorProvider for Fixed {
        fn phrase(&self, cue: FlavorCue, _rng: &mut dyn RngCore) -> Option<String> {
            Some(format!("{}:{}", self.0, cue))
        }
    }

    #[test]
    fn test_low_health_wolf_in_range() {
        let bot = Bot::with_defaults();
        let level = level(40.0).with_enemies(vec![Enemy::new(
            "w1",
            EnemyKind::Wolf,
            Position::new(30.0, 40.0),
            30.0,
        )]);

        let moves = decide(&bot, &level);

        assert_eq!(moves.len(), 5);
        assert_eq!(moves[0], Move::Use(UsableItem::BigPotion));
        assert_eq!(moves[1], Move::Attack);
        assert_eq!(moves[2], Move::Shield);
        assert_eq!(moves[3], Move::MoveTo(Position::new(30.0, 40.0)));
        assert!(!moves
            .iter()
            .any(|m| matches!(m, Move::RedeemSkillPoint(_))));
        match &moves[4] {
            Move::DebugInfo(info) => {
                assert_eq!(info.message, DEBUG_MESSAGE);
                assert_eq!(info.target_id.as_deref(), Some("w1"));
                assert_eq!(info.target_type, Some(ObjectKind::Wolf));
            }
            other => panic!("expected debug info, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_world_only_debug_note() {
        let bot = Bot::with_defaults();
        let moves = decide(&bot, &level(90.0));

        assert_eq!(moves, vec![Move::DebugInfo(DebugInfo::new(DEBUG_MESSAGE))]);
    }

    #[test]
    fn test_skill_point_redeemed_once_first() {
        let bot = Bot::with_defaults();
        let mut level = level(90.0);
        level.own_player = level.own_player.with_skill_points(3);

        let moves = decide(&bot, &level);

        let redeems: Vec<&Move> = moves
            .iter()
            .filter(|m| matches!(m, Move::RedeemSkillPoint(_)))
            .collect();
        assert_eq!(redeems.len(), 1);
        assert!(matches!(
            moves[0],
            Move::RedeemSkillPoint(Skill::Attack | Skill::Health | Skill::Speed)
        ));
    }

    #[test]
    fn test_out_of_range_enemy_only_moves() {
        let bot = Bot::with_defaults();
        let level = level(90.0).with_enemies(vec![Enemy::new(
            "g1",
            EnemyKind::Ghoul,
            Position::new(125.0, 0.0),
            10.0,
        )]);

        let moves = decide(&bot, &level);

        assert!(!moves.iter().any(Move::is_combat));
        assert_eq!(moves[0], Move::MoveTo(Position::new(125.0, 0.0)));
    }

    #[test]
    fn test_coin_target_is_not_attacked() {
        let bot = Bot::with_defaults();
        let level = level(90.0).with_items(vec![Item::new(
            "c1",
            ItemKind::Coin,
            Position::new(5.0, 0.0),
        )]);

        let moves = decide(&bot, &level);

        assert!(!moves.contains(&Move::Attack));
        assert_eq!(moves[0], Move::MoveTo(Position::new(5.0, 0.0)));
    }

    #[test]
    fn test_chest_with_health_is_attacked() {
        let bot = Bot::with_defaults();
        let level = level(90.0).with_items(vec![
            Item::new("ch", ItemKind::Chest, Position::new(10.0, 0.0)).with_health(25.0)
        ]);

        let moves = decide(&bot, &level);

        assert_eq!(moves[0], Move::Attack);
        assert_eq!(moves[1], Move::Shield);
    }

    #[test]
    fn test_full_potion_stack_skipped() {
        let bot = Bot::with_defaults();
        let mut level = level(90.0).with_items(vec![Item::new(
            "p1",
            ItemKind::BigPotion,
            Position::new(1.0, 0.0),
        )]);
        level.own_player = level.own_player.with_inventory(ItemInventory::new(6, 0, 0));

        let moves = decide(&bot, &level);

        assert!(!moves.iter().any(Move::is_movement));
    }

    #[test]
    fn test_heal_at_threshold_boundary() {
        let bot = Bot::with_defaults();

        assert!(decide(&bot, &level(50.0)).contains(&Move::Use(UsableItem::BigPotion)));
        assert!(!decide(&bot, &level(51.0)).contains(&Move::Use(UsableItem::BigPotion)));
    }

    #[test]
    fn test_nan_ratio_is_not_low() {
        let bot = Bot::with_defaults();
        let mut level = level(40.0);
        level.own_player.player.max_health = 0.0;
        level.own_player.player.health = 0.0;

        assert!(!decide(&bot, &level).contains(&Move::Use(UsableItem::BigPotion)));
    }

    #[test]
    fn test_flavor_follows_heal_and_attack() {
        let bot = Bot::with_defaults().with_flavor(Box::new(Fixed("cry")));
        let level = level(10.0).with_enemies(vec![Enemy::new(
            "t1",
            EnemyKind::Tiny,
            Position::new(3.0, 0.0),
            5.0,
        )]);

        let moves = decide(&bot, &level);

        assert_eq!(moves[0], Move::Use(UsableItem::BigPotion));
        assert_eq!(moves[1], Move::Speak("cry:heal".to_string()));
        assert_eq!(moves[2], Move::Attack);
        assert_eq!(moves[3], Move::Shield);
        assert_eq!(moves[4], Move::Speak("cry:attack".to_string()));
    }

    #[test]
    fn test_enabled_flavor_uses_default_phrases() {
        let mut config = BotConfig::default();
        config.flavor.enabled = true;
        let bot = Bot::new(config).unwrap();

        let moves = decide(&bot, &level(10.0));

        match &moves[1] {
            Move::Speak(line) => assert!(default_phrases().heal.contains(line)),
            other => panic!("expected speak, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = BotConfig::default();
        config.progression.attack = -1.0;

        let err = Bot::new(config).unwrap_err();
        assert!(matches!(
            err,
            BotError::Config(ConfigError::InvalidSkillWeight { .. })
        ));
    }

    #[test]
    fn test_missing_phrase_file_rejected() {
        let mut config = BotConfig::default();
        config.flavor.enabled = true;
        config.flavor.phrases_path = Some("/nonexistent/phrases.toml".into());

        let err = Bot::new(config).unwrap_err();
        assert!(matches!(err, BotError::Flavor(FlavorError::Io(_))));
    }

    #[test]
    fn test_custom_engageable_kinds() {
        let mut config = BotConfig::default();
        config.combat.engageable_kinds = vec![ObjectKind::Minotaur];
        let bot = Bot::new(config).unwrap();
        let level = level(90.0).with_enemies(vec![Enemy::new(
            "w1",
            EnemyKind::Wolf,
            Position::new(1.0, 0.0),
            5.0,
        )]);

        assert!(!decide(&bot, &level).contains(&Move::Attack));
    }

    #[test]
    fn test_bot_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Bot>();
    }
}
