//! Lifecycle tests through the public API
//!
//! Drives whole sessions with the headless scheduler and checks the board
//! invariants after every start, pause, reset, key event and frame.

use glam::Vec2;
use proptest::prelude::*;

use square_collector::platform::{ManualScheduler, RecordingHud, RecordingSurface};
use square_collector::sim::GamePhase;
use square_collector::{Game, GameConfig};

type TestGame = Game<ManualScheduler, RecordingSurface, RecordingHud>;

fn new_game(seed: u64) -> TestGame {
    Game::with_seed(
        GameConfig::default(),
        seed,
        ManualScheduler::default(),
        RecordingSurface::default(),
        RecordingHud::default(),
    )
}

fn run_frames(game: &mut TestGame, n: usize) -> usize {
    let mut ran = 0;
    for _ in 0..n {
        if game.scheduler_mut().fire().is_none() {
            break;
        }
        game.tick();
        ran += 1;
    }
    ran
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Start,
    TogglePause,
    Reset,
    KeyDown(&'static str),
    KeyUp(&'static str),
    Frames(usize),
}

fn op() -> impl Strategy<Value = Op> {
    let key = prop::sample::select(vec![
        "ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "w", "a", "s", "d",
    ]);
    prop_oneof![
        Just(Op::Start),
        Just(Op::TogglePause),
        Just(Op::Reset),
        key.clone().prop_map(Op::KeyDown),
        key.prop_map(Op::KeyUp),
        (1usize..120).prop_map(Op::Frames),
    ]
}

#[test]
fn test_full_session() {
    let mut game = new_game(2024);
    game.show_initial();
    assert_eq!(game.phase(), GamePhase::Idle);

    game.start();
    game.key_down("ArrowLeft");
    game.key_down("ArrowUp");
    let ran = run_frames(&mut game, 200);
    assert_eq!(ran, 200);

    // Pinned in the top-left corner
    assert_eq!(game.state().player.pos, Vec2::ZERO);

    game.toggle_pause();
    assert_eq!(run_frames(&mut game, 10), 1);
    assert_eq!(game.scheduler().pending_count(), 0);

    game.toggle_pause();
    game.key_up("ArrowLeft");
    game.key_up("ArrowUp");
    game.key_down("ArrowRight");
    run_frames(&mut game, 300);
    let b = game.state().player.bounds();
    assert_eq!(b.right(), 800.0);

    game.reset();
    assert_eq!(game.phase(), GamePhase::Idle);
    assert_eq!(game.state().score, 0);
    assert_eq!(game.state().player.pos, Vec2::new(375.0, 275.0));
    assert_eq!(run_frames(&mut game, 5), 0);
}

#[test]
fn test_hud_scores_are_multiples_of_ten() {
    let mut game = new_game(77);
    game.start();
    // Zig-zag across the board to pick things up
    for (key, n) in [("d", 80), ("s", 25), ("a", 160), ("s", 25), ("d", 160)] {
        game.key_down(key);
        run_frames(&mut game, n);
        game.key_up(key);
    }
    let history = &game.hud().score_history;
    assert!(history.iter().all(|s| s % 10 == 0));
    assert!(history.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(game.hud().score, game.state().score);
}

proptest! {
    #[test]
    fn prop_lifecycle_invariants(seed in any::<u64>(), ops in prop::collection::vec(op(), 1..60)) {
        let config = GameConfig::default();
        let mut game = new_game(seed);
        game.show_initial();

        for op in ops {
            let score_before = game.state().score;
            let phase_before = game.phase();

            match op {
                Op::Start => game.start(),
                Op::TogglePause => game.toggle_pause(),
                Op::Reset => game.reset(),
                Op::KeyDown(k) => game.key_down(k),
                Op::KeyUp(k) => game.key_up(k),
                Op::Frames(n) => {
                    run_frames(&mut game, n);
                }
            }

            let state = game.state();
            let b = state.player.bounds();
            prop_assert!(b.pos.x >= 0.0 && b.pos.y >= 0.0);
            prop_assert!(b.right() <= config.canvas_width);
            prop_assert!(b.bottom() <= config.canvas_height);
            prop_assert_eq!(state.items.len(), config.max_items);
            prop_assert_eq!(state.score % 10, 0);
            prop_assert_eq!(game.hud().score, state.score);

            // At most one frame is ever in flight, and only while running
            prop_assert!(game.scheduler().pending_count() <= 1);
            if game.phase() == GamePhase::Idle {
                prop_assert_eq!(game.scheduler().pending_count(), 0);
            }

            match op {
                Op::Reset => {
                    prop_assert_eq!(game.phase(), GamePhase::Idle);
                    prop_assert_eq!(state.score, 0);
                    prop_assert_eq!(state.player.pos, Vec2::new(375.0, 275.0));
                }
                Op::TogglePause if phase_before == GamePhase::Idle => {
                    prop_assert_eq!(game.phase(), GamePhase::Idle);
                }
                _ if phase_before == GamePhase::Paused && game.phase() == GamePhase::Paused => {
                    prop_assert_eq!(state.score, score_before);
                }
                _ => {
                    prop_assert!(state.score >= score_before);
                }
            }
        }
    }
}
