pub mod basket;
pub mod collision;
pub mod spawn;
pub mod star;

use rand::Rng;

use crate::consts::*;
use crate::input::Controls;

pub use basket::Basket;
pub use collision::{Bounds, Sweep};
pub use spawn::SpawnScheduler;
pub use star::{create_star, Star};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Everything that changes while a game is running.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub score: u32,
    pub lives: i32,
    pub phase: Phase,
    pub spawner: SpawnScheduler,
    pub stars: Vec<Star>,
    pub basket: Basket,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: START_LIVES,
            phase: Phase::Playing,
            spawner: SpawnScheduler::new(),
            stars: Vec::new(),
            basket: Basket::centered(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Runs one frame: steer, maybe spawn, then move and resolve stars.
    /// Does nothing once the game is over.
    pub fn tick(&mut self, controls: Controls, rng: &mut impl Rng) {
        if self.is_game_over() {
            return;
        }

        self.basket.steer(controls);

        if self.spawner.tick(self.score) {
            let star = create_star(rng);
            log::trace!("spawned star size={} x={} speed={}", star.size, star.x, star.speed);
            self.stars.push(star);
        }

        let sweep = collision::sweep(
            std::mem::take(&mut self.stars),
            &self.basket.bounds(),
            SCREEN_HEIGHT,
        );
        self.apply(sweep);
    }

    fn apply(&mut self, sweep: Sweep) {
        self.stars = sweep.kept;
        self.score += sweep.caught;
        if sweep.missed == 0 {
            return;
        }
        self.lives -= sweep.missed as i32;
        if self.lives <= 0 {
            self.phase = Phase::GameOver;
            log::info!("game over, final score {}", self.score);
        }
    }

    /// Back to a fresh game, whatever the current phase.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    /// Restart request from the player. Only honoured after a game over;
    /// returns whether a reset happened.
    pub fn restart(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }
        log::info!("restarting after score {}", self.score);
        self.reset();
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
