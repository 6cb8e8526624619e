//! Game configuration
//!
//! Defaults reproduce the classic layout. A JSON override can be supplied by
//! the host page; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("canvas {width}x{height} cannot fit a {size}px {what}")]
    CanvasTooSmall {
        width: f32,
        height: f32,
        size: f32,
        what: &'static str,
    },
    #[error("max_items must be at least 1")]
    NoItems,
    #[error("max_items {count} exceeds the limit of {limit}")]
    TooManyItems { count: usize, limit: usize },
    #[error("points_per_item must be a positive multiple of {step}, got {points}")]
    BadPoints { points: u32, step: u32 },
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub player_size: f32,
    pub player_speed: f32,
    pub player_color: String,
    pub item_size: f32,
    pub item_color: String,
    pub max_items: usize,
    pub points_per_item: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_color: PLAYER_COLOR.to_string(),
            item_size: ITEM_SIZE,
            item_color: ITEM_COLOR.to_string(),
            max_items: MAX_ITEMS,
            points_per_item: POINTS_PER_ITEM,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the canvas dimensions (the host canvas wins over the config)
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Check that the geometry leaves room to play
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_size", self.player_size),
            ("player_speed", self.player_speed),
            ("item_size", self.item_size),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        // Items spawn in [0, canvas - size), which must be non-empty
        for (size, what) in [(self.player_size, "player"), (self.item_size, "item")] {
            if size >= self.canvas_width || size >= self.canvas_height {
                return Err(ConfigError::CanvasTooSmall {
                    width: self.canvas_width,
                    height: self.canvas_height,
                    size,
                    what,
                });
            }
        }

        if self.max_items == 0 {
            return Err(ConfigError::NoItems);
        }
        if self.max_items > MAX_ITEMS_LIMIT {
            return Err(ConfigError::TooManyItems {
                count: self.max_items,
                limit: MAX_ITEMS_LIMIT,
            });
        }

        if self.points_per_item == 0 || self.points_per_item % POINTS_PER_ITEM != 0 {
            return Err(ConfigError::BadPoints {
                points: self.points_per_item,
                step: POINTS_PER_ITEM,
            });
        }

        Ok(())
    }
}
