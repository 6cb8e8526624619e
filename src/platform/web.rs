//! Browser bindings (WASM only)
//!
//! Wires the canvas, the three control buttons, the score text and the
//! keyboard to a [`Game`], and schedules frames with `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlCanvasElement, KeyboardEvent, Window};

use crate::config::GameConfig;
use crate::game::{FrameHandle, Game, Hud, Scheduler};
use crate::renderer::CanvasSurface;

const CANVAS_ID: &str = "gameCanvas";
const START_BTN_ID: &str = "startBtn";
const PAUSE_BTN_ID: &str = "pauseBtn";
const RESET_BTN_ID: &str = "resetBtn";
const SCORE_ID: &str = "scoreValue";
const CONFIG_ATTR: &str = "data-config";

type WebGame = Game<FrameScheduler, CanvasSurface, DomHud>;

/// `requestAnimationFrame` scheduler that calls back into the game
pub struct FrameScheduler {
    window: Window,
    on_frame: Closure<dyn FnMut(f64)>,
}

impl FrameScheduler {
    fn new(window: Window, game: Weak<RefCell<WebGame>>) -> Self {
        let on_frame = Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            if let Some(game) = game.upgrade() {
                game.borrow_mut().tick();
            }
        });
        Self { window, on_frame }
    }
}

impl Scheduler for FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        match self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

/// Score text and control buttons in the page
pub struct DomHud {
    start_btn: HtmlButtonElement,
    pause_btn: HtmlButtonElement,
    score: Element,
}

impl DomHud {
    fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            start_btn: button(document, START_BTN_ID)?,
            pause_btn: button(document, PAUSE_BTN_ID)?,
            score: element(document, SCORE_ID)?,
        })
    }
}

impl Hud for DomHud {
    fn set_score(&mut self, score: u32) {
        self.score.set_text_content(Some(&score.to_string()));
    }

    fn set_start_control(&mut self, label: &str, enabled: bool) {
        self.start_btn.set_text_content(Some(label));
        self.start_btn.set_disabled(!enabled);
    }

    fn set_pause_label(&mut self, label: &str) {
        self.pause_btn.set_text_content(Some(label));
    }
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
}

fn button(document: &Document, id: &str) -> Result<HtmlButtonElement, JsValue> {
    Ok(element(document, id)?.dyn_into::<HtmlButtonElement>()?)
}

/// Config from the canvas `data-config` attribute, sized to the canvas
fn load_config(canvas: &HtmlCanvasElement) -> GameConfig {
    let config = match canvas.get_attribute(CONFIG_ATTR) {
        Some(json) => GameConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring {}: {}", CONFIG_ATTR, e);
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };

    let sized = config.with_canvas(canvas.width() as f32, canvas.height() as f32);
    match sized.validate() {
        Ok(()) => sized,
        Err(e) => {
            log::warn!("Canvas size rejected ({}), using defaults", e);
            GameConfig::default()
        }
    }
}

/// Attach a click handler that runs `action` on the game
fn on_click(
    document: &Document,
    id: &str,
    game: &Rc<RefCell<WebGame>>,
    action: fn(&mut WebGame),
) -> Result<(), JsValue> {
    let btn = element(document, id)?;
    let game = game.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        action(&mut game.borrow_mut());
    });
    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_keyboard(document: &Document, game: &Rc<RefCell<WebGame>>) -> Result<(), JsValue> {
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().key_down(&event.key());
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().key_up(&event.key());
        });
        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Build the game and hook it up to the page
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }

    log::info!("Square Collector starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = element(&document, CANVAS_ID)?.dyn_into::<HtmlCanvasElement>()?;
    let config = load_config(&canvas);
    let surface = CanvasSurface::new(&canvas)?;
    let hud = DomHud::new(&document)?;

    let seed = js_sys::Date::now() as u64;
    let game: Rc<RefCell<WebGame>> = Rc::new_cyclic(|weak| {
        let scheduler = FrameScheduler::new(window.clone(), weak.clone());
        RefCell::new(Game::with_seed(config, seed, scheduler, surface, hud))
    });
    log::info!("Game initialized with seed: {}", seed);

    setup_keyboard(&document, &game)?;
    on_click(&document, START_BTN_ID, &game, |g| g.start())?;
    on_click(&document, PAUSE_BTN_ID, &game, |g| g.toggle_pause())?;
    on_click(&document, RESET_BTN_ID, &game, |g| g.reset())?;

    game.borrow_mut().show_initial();
    log::info!("Square Collector ready");

    Ok(())
}
