//! Simulation module
//!
//! All gameplay logic lives here:
//! - Frame-stepped only (one step per display refresh)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, collect_items};
pub use input::KeyState;
pub use spawn::Spawner;
pub use state::{GamePhase, GameState, Item, Player, Rect};
pub use tick::step;
