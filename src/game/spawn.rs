use crate::consts::*;

/// Frame counter deciding when the next star drops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnScheduler {
    pub timer: u32,
    pub interval: u32,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self {
            timer: 0,
            interval: SPAWN_INTERVAL_START,
        }
    }

    /// Advances one frame and returns true when a star should spawn.
    ///
    /// Each spawn that happens while `score` sits on a positive multiple of
    /// `SPAWN_RAMP_EVERY` tightens the interval, down to `SPAWN_INTERVAL_MIN`.
    pub fn tick(&mut self, score: u32) -> bool {
        self.timer += 1;
        if self.timer < self.interval {
            return false;
        }
        self.timer = 0;
        if self.interval > SPAWN_INTERVAL_MIN && score > 0 && score % SPAWN_RAMP_EVERY == 0 {
            self.interval = self
                .interval
                .saturating_sub(SPAWN_INTERVAL_STEP)
                .max(SPAWN_INTERVAL_MIN);
            log::debug!("spawn interval now {} frames (score {})", self.interval, score);
        }
        true
    }
}

impl Default for SpawnScheduler {
    fn default() -> Self {
        Self::new()
    }
}
