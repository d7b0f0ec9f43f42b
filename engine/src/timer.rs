//! Tick-driven countdown for transient UI states.
//!
//! Scenes never arm wall-clock timers. A transient state carries a
//! `Countdown` and the event loop advances it with measured deltas, so
//! tests can fast-forward with synthetic durations.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: Duration,
}

impl Countdown {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining: duration,
        }
    }

    /// Advance by `delta`. Returns true once the countdown has expired.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(delta);
        self.is_expired()
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::Countdown;
    use std::time::Duration;

    #[test]
    fn expires_exactly_at_duration() {
        let mut c = Countdown::new(Duration::from_millis(100));
        assert!(!c.tick(Duration::from_millis(99)));
        assert!(c.tick(Duration::from_millis(1)));
        assert!(c.is_expired());
    }

    #[test]
    fn overshoot_saturates() {
        let mut c = Countdown::new(Duration::from_millis(10));
        assert!(c.tick(Duration::from_secs(5)));
        assert_eq!(c.remaining(), Duration::ZERO);
    }

    #[test]
    fn zero_duration_is_immediately_expired() {
        let c = Countdown::new(Duration::ZERO);
        assert!(c.is_expired());
    }
}
