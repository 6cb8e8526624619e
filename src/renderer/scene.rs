//! Scene drawing for items and the player

use super::Surface;
use crate::consts::{EYE_COLOR, EYE_SIZE, LEFT_EYE_OFFSET, RIGHT_EYE_OFFSET};
use crate::sim::{GameState, Item, Player};

/// Items are filled circles inscribed in their box
pub fn draw_items<S: Surface + ?Sized>(surface: &mut S, items: &[Item]) {
    for item in items {
        let center = item.center();
        surface.fill_circle(center.x, center.y, item.size.x / 2.0, &item.color);
    }
}

/// Player body plus two eyes
pub fn draw_player<S: Surface + ?Sized>(surface: &mut S, player: &Player) {
    surface.fill_rect(
        player.pos.x,
        player.pos.y,
        player.size.x,
        player.size.y,
        &player.color,
    );

    for (dx, dy) in [LEFT_EYE_OFFSET, RIGHT_EYE_OFFSET] {
        surface.fill_rect(
            player.pos.x + dx,
            player.pos.y + dy,
            EYE_SIZE,
            EYE_SIZE,
            EYE_COLOR,
        );
    }
}

/// Clear the canvas and draw everything, player on top
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    surface.clear(0.0, 0.0, state.canvas.x, state.canvas.y);
    draw_items(surface, &state.items);
    draw_player(surface, &state.player);
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::config::GameConfig;
    use crate::platform::headless::{DrawCmd, RecordingSurface};

    #[test]
    fn test_scene_order_items_then_player() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.items = vec![Item {
            pos: Vec2::new(10.0, 20.0),
            size: Vec2::splat(30.0),
            color: "#f39c12".into(),
        }];

        let mut surface = RecordingSurface::default();
        draw_scene(&mut surface, &state);

        assert_eq!(
            surface.commands,
            vec![
                DrawCmd::Clear {
                    x: 0.0,
                    y: 0.0,
                    w: 800.0,
                    h: 600.0
                },
                DrawCmd::Circle {
                    cx: 25.0,
                    cy: 35.0,
                    r: 15.0,
                    color: "#f39c12".into()
                },
                DrawCmd::Rect {
                    x: 375.0,
                    y: 275.0,
                    w: 50.0,
                    h: 50.0,
                    color: "#3498db".into()
                },
                DrawCmd::Rect {
                    x: 385.0,
                    y: 290.0,
                    w: 10.0,
                    h: 10.0,
                    color: "#fff".into()
                },
                DrawCmd::Rect {
                    x: 405.0,
                    y: 290.0,
                    w: 10.0,
                    h: 10.0,
                    color: "#fff".into()
                },
            ]
        );
    }
}
