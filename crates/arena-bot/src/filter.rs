//! Target eligibility filters.
//!
//! Items are gated by inventory caps, enemies by being alive. Both filters
//! are stable: they keep the input order.

use arena_state::{Enemy, Item, ItemInventory};

use crate::config::InventoryCaps;

/// Returns true if picking up `item` would not exceed its inventory cap.
///
/// Kinds without a counter (coins, chests, power-ups) are always pickable.
pub fn is_pickable(item: &Item, inventory: &ItemInventory, caps: &InventoryCaps) -> bool {
    match (caps.cap_for(item.kind), inventory.count(item.kind)) {
        (Some(cap), Some(count)) => count < cap,
        _ => true,
    }
}

/// Items the player may still pick up, given current inventory counts.
pub fn filter_pickable_items<'a>(
    items: &'a [Item],
    inventory: &ItemInventory,
    caps: &InventoryCaps,
) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| is_pickable(item, inventory, caps))
        .collect()
}

/// Enemies with a present, strictly positive health value.
pub fn filter_alive_enemies(enemies: &[Enemy]) -> Vec<&Enemy> {
    enemies.iter().filter(|enemy| enemy.is_alive()).collect()
}
