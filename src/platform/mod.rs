//! Platform abstraction layer
//!
//! - `web`: browser canvas, buttons, keyboard and `requestAnimationFrame`
//! - `headless`: manual frame scheduling and recording doubles, used by the
//!   native binary and tests

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{DrawCmd, ManualScheduler, RecordingHud, RecordingSurface};
