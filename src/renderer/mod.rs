//! Rendering module
//!
//! Immediate-mode 2D drawing through the [`Surface`] trait. The browser
//! implementation wraps a canvas 2D context; tests record commands instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{draw_items, draw_player, draw_scene};

/// A 2D drawing target addressed in canvas pixels
pub trait Surface {
    /// Clear a rectangular region
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    /// Fill a circle
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str);
}
