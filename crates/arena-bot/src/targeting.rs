//! Nearest-target selection.
//!
//! Decides which eligible item or enemy the bot heads for this tick, based on
//! straight-line distance and the configured [`TargetPolicy`].

use arena_state::{Enemy, Item, ItemKind, ObjectKind, Position};

use crate::config::TargetPolicy;

/// A world entity the bot can move towards.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Item(&'a Item),
    Enemy(&'a Enemy),
}

impl<'a> Target<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Target::Item(item) => &item.id,
            Target::Enemy(enemy) => &enemy.id,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Target::Item(item) => item.kind.into(),
            Target::Enemy(enemy) => enemy.kind.into(),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Target::Item(item) => item.position,
            Target::Enemy(enemy) => enemy.position,
        }
    }

    /// Health if the entity carries one. Items other than chests usually don't.
    pub fn health(&self) -> Option<f64> {
        match self {
            Target::Item(item) => item.health,
            Target::Enemy(enemy) => enemy.health,
        }
    }

    /// True if the target has a present, strictly positive health value.
    pub fn has_positive_health(&self) -> bool {
        matches!(self.health(), Some(health) if health > 0.0)
    }
}

/// The chosen target and its distance from the bot.
#[derive(Debug, Clone, Copy)]
pub struct SelectedTarget<'a> {
    pub target: Target<'a>,
    pub distance: f64,
}

/// Returns the candidate closest to `origin`.
///
/// Ties keep the first candidate encountered. Returns `None` for an empty
/// candidate list.
pub fn nearest<'a, I>(origin: &Position, candidates: I) -> Option<SelectedTarget<'a>>
where
    I: IntoIterator<Item = Target<'a>>,
{
    let mut best: Option<SelectedTarget<'a>> = None;
    let mut min_distance = f64::INFINITY;

    for target in candidates {
        let distance = origin.distance_to(&target.position());
        if distance < min_distance {
            min_distance = distance;
            best = Some(SelectedTarget { target, distance });
        }
    }

    best
}

/// Picks the target for this tick according to a [`TargetPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetSelector {
    policy: TargetPolicy,
}

impl TargetSelector {
    pub fn new(policy: TargetPolicy) -> Self {
        Self { policy }
    }

    /// Selects a target among already-filtered items and living enemies.
    pub fn select<'a>(
        &self,
        origin: &Position,
        items: &[&'a Item],
        enemies: &[&'a Enemy],
    ) -> Option<SelectedTarget<'a>> {
        match self.policy {
            TargetPolicy::FlatNearest => nearest(origin, Self::pool(items, enemies)),
            TargetPolicy::ChestFirst => Self::select_chest_first(origin, items, enemies),
        }
    }

    /// Items first, then enemies, each in input order.
    fn pool<'a, 's>(
        items: &'s [&'a Item],
        enemies: &'s [&'a Enemy],
    ) -> impl Iterator<Item = Target<'a>> + 's {
        items
            .iter()
            .map(|item| Target::Item(*item))
            .chain(enemies.iter().map(|enemy| Target::Enemy(*enemy)))
    }

    fn select_chest_first<'a>(
        origin: &Position,
        items: &[&'a Item],
        enemies: &[&'a Enemy],
    ) -> Option<SelectedTarget<'a>> {
        // A chest already broken open (health reported as zero) is no longer a prize.
        let chests = items
            .iter()
            .filter(|item| item.kind == ItemKind::Chest)
            .filter(|item| item.health.map_or(true, |health| health > 0.0))
            .map(|item| Target::Item(*item));

        if let Some(chest) = nearest(origin, chests) {
            return Some(chest);
        }

        let best_item = nearest(
            origin,
            items
                .iter()
                .filter(|item| item.kind != ItemKind::Chest)
                .map(|item| Target::Item(*item)),
        );
        let best_enemy = nearest(origin, enemies.iter().map(|enemy| Target::Enemy(*enemy)));

        match (best_item, best_enemy) {
            (Some(item), Some(enemy)) => {
                if item.distance <= enemy.distance {
                    Some(item)
                } else {
                    Some(enemy)
                }
            }
            (item, enemy) => item.or(enemy),
        }
    }
}
