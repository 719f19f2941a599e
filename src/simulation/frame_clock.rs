use std::time::{Duration, Instant};

/// Paces the loop to a fixed tick period.
pub struct FrameClock {
    period: Duration,
    tick_started: Instant,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        FrameClock {
            period,
            tick_started: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Marks the beginning of a tick.
    pub fn start_tick(&mut self) {
        self.tick_started = Instant::now();
    }

    /// Time still owed to the current tick, zero once it has overrun.
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.tick_started.elapsed())
    }

    /// Sleeps until one period has passed since `start_tick`.
    pub fn wait_for_next_tick(&self) {
        let remaining = self.remaining();
        if remaining.is_zero() {
            log::trace!("Tick overran its {:?} budget", self.period);
            return;
        }
        std::thread::sleep(remaining);
    }
}
