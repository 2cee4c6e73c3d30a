//! Scene drawing against an abstract 800x600 surface.
//!
//! Nothing here knows about terminals; `ui::raster` is the surface the game
//! actually paints on.

use ratatui::style::Color;

use crate::consts::*;
use crate::game::{Basket, Bounds, GameState, Star};

/// Point sizes the text service offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSize {
    /// 36pt
    Large,
    /// 24pt
    Small,
}

/// Which point of the text box `at` refers to. `y` is always the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    TopCenter,
}

pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Bounds, radius: i32, color: Color);
    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color);
    fn text(&mut self, text: &str, at: (i32, i32), anchor: Anchor, size: TextSize, color: Color);
}

pub fn draw(state: &GameState, surface: &mut impl Surface) {
    surface.clear(BACKGROUND_COLOR);

    if state.is_game_over() {
        draw_game_over(state.score, surface);
        return;
    }

    draw_basket(&state.basket, surface);
    for star in &state.stars {
        surface.fill_polygon(&star_points(star), star.color);
    }

    surface.text(
        &format!("Score: {}", state.score),
        (10, 10),
        Anchor::TopLeft,
        TextSize::Large,
        TEXT_COLOR,
    );
    surface.text(
        &format!("Lives: {}", state.lives),
        (SCREEN_WIDTH - 10, 10),
        Anchor::TopRight,
        TextSize::Large,
        TEXT_COLOR,
    );
}

fn draw_basket(basket: &Basket, surface: &mut impl Surface) {
    surface.fill_rect(basket.bounds(), BASKET_RADIUS, PLAYER_COLOR);
    surface.fill_rect(basket.handle(), HANDLE_RADIUS, PLAYER_COLOR);
}

fn draw_game_over(score: u32, surface: &mut impl Surface) {
    let cx = SCREEN_WIDTH / 2;
    let cy = SCREEN_HEIGHT / 2;
    surface.text("GAME OVER", (cx, cy - 50), Anchor::TopCenter, TextSize::Large, GAME_OVER_COLOR);
    surface.text(
        &format!("Final Score: {}", score),
        (cx, cy),
        Anchor::TopCenter,
        TextSize::Large,
        TEXT_COLOR,
    );
    surface.text(
        "Press SPACE to Play Again",
        (cx, cy + 50),
        Anchor::TopCenter,
        TextSize::Small,
        TEXT_COLOR,
    );
}

/// Ten vertices around the star's center, alternating outer (size/2) and
/// inner (size/4) radius, vertex k at 90 + 72k degrees. Screen y points down.
pub fn star_points(star: &Star) -> [(f32, f32); 10] {
    let (cx, cy) = star.center();
    let outer = star.size as f32 / 2.0;
    let inner = star.size as f32 / 4.0;
    let mut points = [(0.0, 0.0); 10];
    for (k, p) in points.iter_mut().enumerate() {
        let angle = (90.0 + 72.0 * k as f32).to_radians();
        let r = if k % 2 == 0 { outer } else { inner };
        *p = (cx + r * angle.cos(), cy + r * angle.sin());
    }
    points
}
