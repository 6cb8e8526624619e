//! Item spawning
//!
//! Items land uniformly at random; they may overlap each other or the player.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Item;
use crate::config::GameConfig;

/// Produces items for a fixed-size canvas
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    canvas: Vec2,
    item_size: Vec2,
    item_color: String,
    max_items: usize,
}

impl Spawner {
    /// Create a spawner with a seeded RNG (same seed, same items)
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            canvas: Vec2::new(config.canvas_width, config.canvas_height),
            item_size: Vec2::splat(config.item_size),
            item_color: config.item_color.clone(),
            max_items: config.max_items,
        }
    }

    /// A new item somewhere in `[0, canvas - size)` on both axes
    pub fn create_item(&mut self) -> Item {
        let max = self.canvas - self.item_size;
        Item {
            pos: Vec2::new(
                self.rng.random_range(0.0..max.x),
                self.rng.random_range(0.0..max.y),
            ),
            size: self.item_size,
            color: self.item_color.clone(),
        }
    }

    /// Replace the active set with a full population of fresh items
    pub fn init_items(&mut self, items: &mut Vec<Item>) {
        items.clear();
        for _ in 0..self.max_items {
            let item = self.create_item();
            items.push(item);
        }
    }
}
