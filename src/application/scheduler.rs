use std::time::{Duration, Instant};

use super::Mode;

/// How long the loop may block waiting for input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wait {
    /// Block until a key arrives
    Forever,
    /// Block at most this long, then tick
    For(Duration),
}

/// Single-threaded tick scheduler.
///
/// The run loop has exactly one suspension point: waiting for either the
/// next tick deadline or an input event, whichever comes first.
#[derive(Clone, Copy, Debug)]
pub struct TickScheduler {
    last_tick: Instant,
}

impl TickScheduler {
    pub fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// Input budget for the current mode
    pub fn wait(&self, mode: Mode, interval: Duration, now: Instant) -> Wait {
        match mode {
            Mode::Paused => Wait::Forever,
            Mode::Running => Wait::For(self.deadline(interval).saturating_duration_since(now)),
        }
    }

    /// Whether a running session owes a generation
    pub fn due(&self, interval: Duration, now: Instant) -> bool {
        now >= self.deadline(interval)
    }

    /// Start a new interval from `now`
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }

    fn deadline(&self, interval: Duration) -> Instant {
        self.last_tick + interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paused_blocks_forever() {
        let now = Instant::now();
        let scheduler = TickScheduler::new(now);
        assert_eq!(scheduler.wait(Mode::Paused, Duration::from_millis(10), now), Wait::Forever);
    }

    #[test]
    fn test_running_waits_for_remaining_interval() {
        let start = Instant::now();
        let scheduler = TickScheduler::new(start);
        let interval = Duration::from_millis(100);
        let later = start + Duration::from_millis(30);
        assert_eq!(
            scheduler.wait(Mode::Running, interval, later),
            Wait::For(Duration::from_millis(70))
        );
        assert!(!scheduler.due(interval, later));
    }

    #[test]
    fn test_overdue_tick_does_not_wait() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(start);
        let interval = Duration::from_millis(100);
        let late = start + Duration::from_millis(250);
        assert_eq!(scheduler.wait(Mode::Running, interval, late), Wait::For(Duration::ZERO));
        assert!(scheduler.due(interval, late));

        scheduler.reset(late);
        assert!(!scheduler.due(interval, late));
    }
}
