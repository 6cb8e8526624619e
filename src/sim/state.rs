//! Game state and entity types
//!
//! Everything the frame loop mutates lives in [`GameState`].

use glam::Vec2;

use crate::config::GameConfig;

/// Lifecycle phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Not started (initial, and after reset)
    #[default]
    Idle,
    /// Frame loop active
    Running,
    /// Started but frozen; the loop is not scheduled
    Paused,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The player-controlled square
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Velocity for the current frame (re-derived from input every tick)
    pub vel: Vec2,
    pub speed: f32,
    pub color: String,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Self::center(config),
            size: Vec2::splat(config.player_size),
            vel: Vec2::ZERO,
            speed: config.player_speed,
            color: config.player_color.clone(),
        }
    }

    /// Top-left position that centers the player on the canvas
    pub fn center(config: &GameConfig) -> Vec2 {
        Vec2::new(
            config.canvas_width / 2.0 - config.player_size / 2.0,
            config.canvas_height / 2.0 - config.player_size / 2.0,
        )
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Apply a velocity and clamp the box inside the canvas
    pub fn advance(&mut self, vel: Vec2, canvas: Vec2) {
        self.vel = vel;
        self.pos += vel;

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        }
        if self.pos.x + self.size.x > canvas.x {
            self.pos.x = canvas.x - self.size.x;
        }
        if self.pos.y + self.size.y > canvas.y {
            self.pos.y = canvas.y - self.size.y;
        }
    }
}

/// A collectible item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: String,
}

impl Item {
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Center of the drawn circle
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub player: Player,
    /// Active item set
    pub items: Vec<Item>,
    /// Canvas dimensions
    pub canvas: Vec2,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            player: Player::new(config),
            items: Vec::with_capacity(config.max_items),
            canvas: Vec2::new(config.canvas_width, config.canvas_height),
        }
    }

    /// Started (running or paused)
    #[inline]
    pub fn running(&self) -> bool {
        matches!(self.phase, GamePhase::Running | GamePhase::Paused)
    }

    #[inline]
    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }
}
