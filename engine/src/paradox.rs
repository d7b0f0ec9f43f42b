//! The paradox toggle loop.
//!
//! A single self-referential node ("this statement is false") negated
//! on a fixed period. The loop has no fixed point: it never converges,
//! which is the whole lesson. Past a step threshold the scene surfaces
//! a canned "infinite loop detected" warning.

use std::time::Duration;

/// Wall-clock period between negations.
const PERIOD: Duration = Duration::from_secs(1);
/// Steps after which the oscillation is flagged as a non-terminating loop.
const WARNING_STEPS: u64 = 10;

#[derive(Debug)]
pub struct ParadoxLoop {
    value: bool,
    steps: u64,
    running: bool,
    elapsed: Duration,
}

impl Default for ParadoxLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl ParadoxLoop {
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: true,
            steps: 0,
            running: false,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn value(&self) -> bool {
        self.value
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fraction of the current period already elapsed, for rendering.
    #[must_use]
    pub fn phase(&self) -> f32 {
        (self.elapsed.as_secs_f32() / PERIOD.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn warning(&self) -> bool {
        self.steps > WARNING_STEPS
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halt the oscillation without resetting value or counter.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Restore the initial state: value true, counter zero, stopped.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Accumulate elapsed time; fires one negation per full period, so a
    /// large delta may step more than once.
    pub fn tick(&mut self, delta: Duration) {
        if !self.running {
            return;
        }
        self.elapsed += delta;
        while self.elapsed >= PERIOD {
            self.elapsed -= PERIOD;
            self.value = !self.value;
            self.steps += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_once_per_period() {
        let mut node = ParadoxLoop::new();
        node.start();
        assert!(node.value());

        node.tick(Duration::from_secs(1));
        assert!(!node.value());
        assert_eq!(node.steps(), 1);

        node.tick(Duration::from_secs(1));
        assert!(node.value());
        assert_eq!(node.steps(), 2);
    }

    #[test]
    fn large_delta_fires_multiple_steps() {
        let mut node = ParadoxLoop::new();
        node.start();
        node.tick(Duration::from_millis(2500));
        assert_eq!(node.steps(), 2);
        // 500ms of the next period already accumulated.
        node.tick(Duration::from_millis(500));
        assert_eq!(node.steps(), 3);
    }

    #[test]
    fn stop_freezes_without_resetting() {
        let mut node = ParadoxLoop::new();
        node.start();
        node.tick(Duration::from_secs(3));
        node.stop();
        node.tick(Duration::from_secs(10));
        assert_eq!(node.steps(), 3);
        assert!(!node.value());
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut node = ParadoxLoop::new();
        node.start();
        node.tick(Duration::from_secs(5));
        node.reset();
        assert!(node.value());
        assert_eq!(node.steps(), 0);
        assert!(!node.is_running());
    }

    #[test]
    fn warning_after_threshold() {
        let mut node = ParadoxLoop::new();
        node.start();
        node.tick(Duration::from_secs(10));
        assert!(!node.warning());
        node.tick(Duration::from_secs(1));
        assert!(node.warning());
    }

    #[test]
    fn does_not_tick_before_start() {
        let mut node = ParadoxLoop::new();
        node.tick(Duration::from_secs(60));
        assert_eq!(node.steps(), 0);
        assert!(node.value());
    }
}
