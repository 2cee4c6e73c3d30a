use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

/// Non-blocking input drain plus the frame-rate limiter.
pub struct EventHandler {
    frame: Duration,
    frame_start: Instant,
}

impl EventHandler {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    /// Every key event that arrived since the last call. Never blocks.
    pub fn pending(&self) -> io::Result<Vec<KeyEvent>> {
        let mut keys = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    /// Sleeps out whatever is left of the current frame.
    pub fn wait_frame(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
        self.frame_start = Instant::now();
    }
}
