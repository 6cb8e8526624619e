//! Square Collector - steer a square around a canvas and collect items
//!
//! Core modules:
//! - `sim`: Simulation (entities, input sampling, spawning, collisions)
//! - `game`: Frame loop controller and Idle/Running/Paused lifecycle
//! - `renderer`: Drawing surface abstraction and scene drawing
//! - `platform`: Browser bindings and headless doubles
//! - `config`: Tunable game configuration

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{FrameHandle, Game, Hud, Scheduler};
pub use renderer::Surface;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player square
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Player speed (pixels per frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_COLOR: &str = "#3498db";

    /// Player eyes (offsets from player origin)
    pub const EYE_SIZE: f32 = 10.0;
    pub const LEFT_EYE_OFFSET: (f32, f32) = (10.0, 15.0);
    pub const RIGHT_EYE_OFFSET: (f32, f32) = (30.0, 15.0);
    pub const EYE_COLOR: &str = "#fff";

    /// Collectible items
    pub const ITEM_SIZE: f32 = 30.0;
    pub const ITEM_COLOR: &str = "#f39c12";
    /// Active item population while running
    pub const MAX_ITEMS: usize = 5;
    /// Largest population a config may ask for
    pub const MAX_ITEMS_LIMIT: usize = 64;
    /// Score awarded per collected item (configured values must be multiples)
    pub const POINTS_PER_ITEM: u32 = 10;

    /// Control labels
    pub const START_LABEL: &str = "Start Game";
    pub const RUNNING_LABEL: &str = "Running...";
    pub const PAUSE_LABEL: &str = "Pause";
    pub const RESUME_LABEL: &str = "Resume";
}
