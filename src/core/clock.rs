use std::time::Instant;

/// Animation clock - accumulates drawn time in milliseconds
///
/// Unlike a wall clock, time only advances through `tick()`, so callers that
/// stop ticking while paused and `rebase()` on resume exclude the paused
/// interval from the animation.
#[derive(Debug)]
pub struct AnimationClock {
    last_tick: Instant,
    elapsed_ms: f64,
}

impl AnimationClock {
    /// Create new clock starting now with zero accumulated time
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            elapsed_ms: 0.0,
        }
    }

    /// Advance the clock and return total accumulated milliseconds
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        self.elapsed_ms += now.duration_since(self.last_tick).as_secs_f64() * 1000.0;
        self.last_tick = now;
        self.elapsed_ms
    }

    /// Rebase to the current instant without accumulating the gap
    pub fn rebase(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_accumulates_ticked_time() {
        let mut clock = AnimationClock::new();

        thread::sleep(Duration::from_millis(10));
        let first = clock.tick();
        thread::sleep(Duration::from_millis(10));
        let second = clock.tick();

        assert!(first >= 9.0);
        assert!(second > first);
    }

    #[test]
    fn rebase_excludes_the_gap() {
        let mut clock = AnimationClock::new();

        thread::sleep(Duration::from_millis(10));
        let before = clock.tick();

        // Simulate a pause: time passes but is rebased away.
        thread::sleep(Duration::from_millis(20));
        clock.rebase();
        let after = clock.tick();

        assert!(after - before < 5.0);
    }
}
