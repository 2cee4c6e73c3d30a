use crate::consts::*;
use crate::game::collision::Bounds;
use crate::input::Controls;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Basket {
    pub x: i32,
}

impl Basket {
    pub const MAX_X: i32 = SCREEN_WIDTH - BASKET_WIDTH;

    pub fn centered() -> Self {
        Self { x: Self::MAX_X / 2 }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, BASKET_Y, BASKET_WIDTH, BASKET_HEIGHT)
    }

    /// The small grip drawn above the middle of the basket.
    pub fn handle(&self) -> Bounds {
        Bounds::new(
            self.x + BASKET_WIDTH / 2 - HANDLE_SIZE / 2,
            BASKET_Y - HANDLE_SIZE + 5,
            HANDLE_SIZE,
            HANDLE_SIZE,
        )
    }

    /// Left and right are applied one after the other, each clamped, so
    /// holding both usually cancels out but not against a wall.
    pub fn steer(&mut self, controls: Controls) {
        if controls.left && self.x > 0 {
            self.x = (self.x - BASKET_SPEED).max(0);
        }
        if controls.right && self.x < Self::MAX_X {
            self.x = (self.x + BASKET_SPEED).min(Self::MAX_X);
        }
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::centered()
    }
}
