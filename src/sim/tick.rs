//! Per-frame simulation step
//!
//! Movement then collisions. Drawing is the caller's job and happens before
//! this step, so a frame shows the position from the previous step.

use super::collision::collect_items;
use super::input::KeyState;
use super::spawn::Spawner;
use super::state::GameState;

/// Advance the simulation by one frame. Returns the number of items collected.
pub fn step(state: &mut GameState, keys: &KeyState, spawner: &mut Spawner, points: u32) -> usize {
    let vel = keys.velocity(state.player.speed);
    let canvas = state.canvas;
    state.player.advance(vel, canvas);

    collect_items(state, spawner, points)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::config::GameConfig;

    const ALL_KEYS: [&str; 12] = [
        "ArrowUp",
        "ArrowDown",
        "ArrowLeft",
        "ArrowRight",
        "w",
        "a",
        "s",
        "d",
        "W",
        "A",
        "S",
        "D",
    ];

    #[test]
    fn test_step_moves_player() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let mut spawner = Spawner::new(&config, 5);
        let mut keys = KeyState::new();
        keys.key_down("ArrowRight");

        let start = state.player.pos;
        step(&mut state, &keys, &mut spawner, 10);
        assert_eq!(state.player.pos, start + Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_corner_clamp() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let mut spawner = Spawner::new(&config, 5);
        let mut keys = KeyState::new();
        keys.key_down("ArrowLeft");
        keys.key_down("ArrowUp");
        state.player.pos = Vec2::ZERO;

        step(&mut state, &keys, &mut spawner, 10);
        assert_eq!(state.player.pos, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_player_stays_inside_canvas(
            seed in any::<u64>(),
            frames in prop::collection::vec(
                (prop::sample::subsequence(ALL_KEYS.to_vec(), 0..4), 1usize..40),
                1..30,
            ),
        ) {
            let config = GameConfig::default();
            let mut state = GameState::new(&config);
            let mut spawner = Spawner::new(&config, seed);
            spawner.init_items(&mut state.items);

            for (held, repeat) in frames {
                let mut keys = KeyState::new();
                for key in held {
                    keys.key_down(key);
                }
                for _ in 0..repeat {
                    step(&mut state, &keys, &mut spawner, 10);
                    let b = state.player.bounds();
                    prop_assert!(b.pos.x >= 0.0 && b.pos.y >= 0.0);
                    prop_assert!(b.right() <= config.canvas_width);
                    prop_assert!(b.bottom() <= config.canvas_height);
                    prop_assert_eq!(state.items.len(), config.max_items);
                    prop_assert_eq!(state.score % 10, 0);
                }
            }
        }
    }
}
