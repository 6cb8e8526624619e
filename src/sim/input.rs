//! Keyboard state sampling
//!
//! Key events only flip flags here; the frame loop samples the flags once per
//! tick and turns them into a velocity.

use std::collections::HashSet;

use glam::Vec2;

const UP_KEYS: [&str; 3] = ["ArrowUp", "w", "W"];
const DOWN_KEYS: [&str; 3] = ["ArrowDown", "s", "S"];
const LEFT_KEYS: [&str; 3] = ["ArrowLeft", "a", "A"];
const RIGHT_KEYS: [&str; 3] = ["ArrowRight", "d", "D"];

/// Currently held keys, by platform key name
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }

    /// Velocity for this frame.
    ///
    /// Checked in the order up, down, left, right; a later match overwrites
    /// an earlier one, so down beats up and right beats left.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let mut vel = Vec2::ZERO;
        if self.any_held(&UP_KEYS) {
            vel.y = -speed;
        }
        if self.any_held(&DOWN_KEYS) {
            vel.y = speed;
        }
        if self.any_held(&LEFT_KEYS) {
            vel.x = -speed;
        }
        if self.any_held(&RIGHT_KEYS) {
            vel.x = speed;
        }
        vel
    }
}
