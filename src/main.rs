//! Square Collector entry point
//!
//! On the web this wires up the page; natively it plays a short scripted
//! session headlessly and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    square_collector::platform::web::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use square_collector::platform::{ManualScheduler, RecordingHud, RecordingSurface};
    use square_collector::{Game, GameConfig};

    env_logger::init();
    log::info!("Square Collector (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in a browser");

    let mut game = Game::new(
        GameConfig::default(),
        ManualScheduler::default(),
        RecordingSurface::default(),
        RecordingHud::default(),
    );
    game.show_initial();
    let config = game.config();
    log::info!(
        "Canvas {}x{}, {} items worth {} each",
        config.canvas_width,
        config.canvas_height,
        config.max_items,
        config.points_per_item
    );
    game.start();

    // Sweep the canvas in a few straight runs
    let script: [(&[&str], usize); 6] = [
        (&["ArrowLeft", "ArrowUp"], 80),
        (&["d"], 150),
        (&["s"], 40),
        (&["a"], 150),
        (&["s"], 40),
        (&["D", "W"], 100),
    ];

    let mut frames = 0;
    for (keys, count) in script {
        for key in keys {
            game.key_down(key);
        }
        for _ in 0..count {
            if game.scheduler_mut().fire().is_none() {
                break;
            }
            game.tick();
            frames += 1;
        }
        for key in keys {
            game.key_up(key);
        }
    }

    let state = game.state();
    log::info!(
        "Played {} frames: score {}, player at ({:.0}, {:.0}), {} items",
        frames,
        state.score,
        state.player.pos.x,
        state.player.pos.y,
        state.items.len()
    );

    game.toggle_pause();
    game.reset();
    log::info!("After reset: {:?}, score {}", game.phase(), game.state().score);
    println!("Final score: {}", game.hud().score_history.iter().max().copied().unwrap_or(0));
}
