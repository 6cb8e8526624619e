//! Collision detection between the player and items
//!
//! Plain AABB tests. Edges that only touch do not count.

use super::spawn::Spawner;
use super::state::{GameState, Rect};

/// Strict AABB overlap
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

/// Consume every item the player overlaps.
///
/// Each hit removes the item, awards `points` and spawns one replacement, so
/// the population size never changes. Replacements are not tested until the
/// next pass. The score saturates instead of wrapping. Returns the number of
/// items collected.
pub fn collect_items(state: &mut GameState, spawner: &mut Spawner, points: u32) -> usize {
    let player = state.player.bounds();
    let before = state.items.len();
    state.items.retain(|item| !aabb_overlap(&player, &item.bounds()));
    let collected = before - state.items.len();

    for _ in 0..collected {
        state.score = state.score.saturating_add(points);
        let item = spawner.create_item();
        state.items.push(item);
    }

    if collected > 0 {
        log::debug!("Collected {} item(s), score {}", collected, state.score);
    }

    collected
}
