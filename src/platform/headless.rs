//! Headless collaborators
//!
//! Drive a [`Game`](crate::Game) without a browser: frames fire when the
//! caller says so, drawing and HUD updates are recorded for inspection.

use std::collections::VecDeque;

use crate::game::{FrameHandle, Hud, Scheduler};
use crate::renderer::Surface;

/// Frame requests queue up until [`ManualScheduler::fire`] is called
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: VecDeque<FrameHandle>,
    /// Total frames requested
    pub requests: usize,
    /// Total pending frames cancelled
    pub cancelled: usize,
}

impl ManualScheduler {
    /// Take the oldest pending frame. The caller then runs `Game::tick`.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push_back(handle);
        self.requests += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        if self.pending.len() < before {
            self.cancelled += 1;
        }
    }
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        color: String,
    },
}

/// Records every drawing call in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    /// Commands issued since the last clear
    pub fn last_frame(&self) -> &[DrawCmd] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCmd::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCmd::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCmd::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str) {
        self.commands.push(DrawCmd::Circle {
            cx,
            cy,
            r,
            color: color.to_string(),
        });
    }
}

/// Keeps the last value pushed to each HUD element
#[derive(Debug, Default)]
pub struct RecordingHud {
    pub score: u32,
    pub start_label: String,
    pub start_enabled: bool,
    pub pause_label: String,
    /// Every score shown, in order
    pub score_history: Vec<u32>,
}

impl Hud for RecordingHud {
    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.score_history.push(score);
    }

    fn set_start_control(&mut self, label: &str, enabled: bool) {
        self.start_label = label.to_string();
        self.start_enabled = enabled;
    }

    fn set_pause_label(&mut self, label: &str) {
        self.pause_label = label.to_string();
    }
}
