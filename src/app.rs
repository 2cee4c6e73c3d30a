use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::game::GameState;
use crate::input::HeldKeys;

pub struct App {
    pub should_quit: bool,
    pub game: GameState,
    keys: HeldKeys,
    rng: Pcg32,
}

impl App {
    /// `release_events` tells whether the terminal reports key releases.
    pub fn new(seed: u64, release_events: bool) -> Self {
        let keys = if release_events {
            HeldKeys::with_release_events()
        } else {
            HeldKeys::new()
        };
        Self {
            should_quit: false,
            game: GameState::new(),
            keys,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn on_tick(&mut self) {
        self.game.tick(self.keys.controls(), &mut self.rng);
        self.keys.advance();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Press {
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return;
            }
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char(' ') => {
                    if self.game.restart() {
                        self.keys.clear();
                    }
                    return;
                }
                _ => {}
            }
        }
        self.keys.record(&key);
    }
}
