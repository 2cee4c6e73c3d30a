use rand::Rng;
use ratatui::style::Color;

use crate::consts::*;
use crate::game::collision::Bounds;

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub speed: i32,
    pub color: Color,
}

impl Star {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.size, self.size)
    }

    pub fn fall(&mut self) {
        self.y += self.speed;
    }

    /// Center of the bounding square, rounded down to a whole pixel, used
    /// as the polygon origin.
    pub fn center(&self) -> (f32, f32) {
        let half = self.size / 2;
        ((self.x + half) as f32, (self.y + half) as f32)
    }
}

/// Builds a star just above the visible area with random size, column,
/// speed and color.
pub fn create_star(rng: &mut impl Rng) -> Star {
    let size = rng.gen_range(STAR_SIZE_MIN..=STAR_SIZE_MAX);
    let x = rng.gen_range(0..=SCREEN_WIDTH - size);
    let speed = rng.gen_range(STAR_SPEED_MIN..=STAR_SPEED_MAX);
    let color = STAR_COLORS[rng.gen_range(0..STAR_COLORS.len())];
    Star {
        x,
        y: -size,
        size,
        speed,
        color,
    }
}
