//! Frame loop controller
//!
//! Owns the game state and drives the Idle -> Running <-> Paused lifecycle.
//! The loop is a chain of one-shot frame requests: every tick asks the
//! [`Scheduler`] for the next one, and a tick that finds the game paused or
//! stopped simply does not ask again.

use glam::Vec2;
use rand::random;

use crate::config::GameConfig;
use crate::consts::{PAUSE_LABEL, RESUME_LABEL, RUNNING_LABEL, START_LABEL};
use crate::renderer::{Surface, draw_scene};
use crate::sim::{GamePhase, GameState, KeyState, Player, Spawner, step};

/// Opaque id of a pending frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// One-shot frame scheduling (`requestAnimationFrame` in the browser)
pub trait Scheduler {
    /// Ask for [`Game::tick`] to run on the next display refresh
    fn request_frame(&mut self) -> Option<FrameHandle>;
    /// Drop a pending request; unknown or already-fired handles are ignored
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Score display and control buttons
pub trait Hud {
    fn set_score(&mut self, score: u32);
    fn set_start_control(&mut self, label: &str, enabled: bool);
    fn set_pause_label(&mut self, label: &str);
}

/// A game instance with its platform collaborators
pub struct Game<S, R, H> {
    config: GameConfig,
    state: GameState,
    keys: KeyState,
    spawner: Spawner,
    /// Handle from the most recent frame request
    pending: Option<FrameHandle>,
    scheduler: S,
    surface: R,
    hud: H,
}

impl<S: Scheduler, R: Surface, H: Hud> Game<S, R, H> {
    /// Create an idle game with a random spawn seed
    pub fn new(config: GameConfig, scheduler: S, surface: R, hud: H) -> Self {
        Self::with_seed(config, random(), scheduler, surface, hud)
    }

    /// Create an idle game whose item positions follow `seed`
    pub fn with_seed(config: GameConfig, seed: u64, scheduler: S, surface: R, hud: H) -> Self {
        Self {
            state: GameState::new(&config),
            keys: KeyState::new(),
            spawner: Spawner::new(&config, seed),
            pending: None,
            config,
            scheduler,
            surface,
            hud,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.key_up(key);
    }

    /// Populate items and draw the settled scene without starting the loop
    pub fn show_initial(&mut self) {
        self.spawner.init_items(&mut self.state.items);
        self.hud.set_score(self.state.score);
        draw_scene(&mut self.surface, &self.state);
    }

    /// Idle -> Running. Ignored once started.
    pub fn start(&mut self) {
        if self.state.running() {
            log::debug!("start ignored: already {:?}", self.state.phase);
            return;
        }

        self.state.phase = GamePhase::Running;
        self.spawner.init_items(&mut self.state.items);
        self.hud.set_start_control(RUNNING_LABEL, false);
        log::info!("Game started");

        self.tick();
    }

    /// Running <-> Paused. Ignored while idle.
    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            GamePhase::Idle => {
                log::debug!("toggle_pause ignored: not started");
            }
            GamePhase::Running => {
                // The pending frame sees Paused and ends the chain
                self.state.phase = GamePhase::Paused;
                self.hud.set_pause_label(RESUME_LABEL);
                log::info!("Game paused (score {})", self.state.score);
            }
            GamePhase::Paused => {
                // Resumed before the old frame fired; keep a single chain
                if let Some(handle) = self.pending.take() {
                    self.scheduler.cancel_frame(handle);
                }
                self.state.phase = GamePhase::Running;
                self.hud.set_pause_label(PAUSE_LABEL);
                log::info!("Game resumed");
                self.tick();
            }
        }
    }

    /// Any state -> Idle with a fresh board
    pub fn reset(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }

        self.state.phase = GamePhase::Idle;
        self.state.score = 0;
        self.hud.set_score(0);
        self.state.player.pos = Player::center(&self.config);
        self.state.player.vel = Vec2::ZERO;
        self.hud.set_start_control(START_LABEL, true);
        self.hud.set_pause_label(PAUSE_LABEL);

        self.spawner.init_items(&mut self.state.items);
        draw_scene(&mut self.surface, &self.state);
        log::info!("Game reset");
    }

    /// One frame: draw, move, collect, then request the next frame.
    ///
    /// Does nothing unless the phase is exactly `Running`.
    pub fn tick(&mut self) {
        self.pending = None;
        if self.state.phase != GamePhase::Running {
            return;
        }

        draw_scene(&mut self.surface, &self.state);

        let collected = step(
            &mut self.state,
            &self.keys,
            &mut self.spawner,
            self.config.points_per_item,
        );
        if collected > 0 {
            self.hud.set_score(self.state.score);
        }

        self.pending = self.scheduler.request_frame();
    }
}
