use std::time::Duration;

use rand::rngs::StdRng;

use crate::domain::{Grid, LifeRule, DEFAULT_BIRTH_PROBABILITY};

/// Whether generations advance on their own
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    Paused,
}

impl Mode {
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Running => "Running",
            Mode::Paused => "Paused",
        }
    }
}

/// Edit cursor, always inside the grid it was created for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

/// Tick interval bounded by a min/max, adjusted in fixed steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Speed {
    interval: Duration,
    min: Duration,
    max: Duration,
    step: Duration,
}

impl Speed {
    /// The initial interval is clamped into `[min, max]`
    pub fn new(interval: Duration, min: Duration, max: Duration, step: Duration) -> Self {
        let max = max.max(min);
        Self {
            interval: interval.clamp(min, max),
            min,
            max,
            step,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn bounds(&self) -> (Duration, Duration) {
        (self.min, self.max)
    }

    /// Shorter interval; stops at the minimum
    pub fn faster(&mut self) -> Duration {
        self.interval = self.interval.saturating_sub(self.step).max(self.min);
        self.interval
    }

    /// Longer interval; stops at the maximum
    pub fn slower(&mut self) -> Duration {
        self.interval = self.interval.saturating_add(self.step).min(self.max);
        self.interval
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::new(
            Duration::from_micros(100_000),
            Duration::from_micros(10_000),
            Duration::from_micros(5_000_000),
            Duration::from_micros(10_000),
        )
    }
}

/// Session owns everything the simulation mutates.
/// Created once at startup and dropped at exit; nothing is persisted.
#[derive(Debug)]
pub struct Session {
    pub(crate) grid: Grid,
    pub(crate) rule: LifeRule,
    pub(crate) cursor: Cursor,
    pub(crate) mode: Mode,
    pub(crate) speed: Speed,
    pub(crate) generation: u64,
    pub(crate) birth_probability: f64,
    pub(crate) rng: StdRng,
}

impl Session {
    /// New sessions start paused with the cursor in the top-left corner
    pub fn new(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            rule: LifeRule::default(),
            cursor: Cursor::default(),
            mode: Mode::Paused,
            speed: Speed::default(),
            generation: 0,
            birth_probability: DEFAULT_BIRTH_PROBABILITY,
            rng,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_rule(mut self, rule: LifeRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_birth_probability(mut self, p: f64) -> Self {
        self.birth_probability = p;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn rule(&self) -> &LifeRule {
        &self.rule
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.mode, Mode::Running)
    }

    pub const fn interval(&self) -> Duration {
        self.speed.interval()
    }

    pub const fn speed(&self) -> &Speed {
        &self.speed
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn micros(us: u64) -> Duration {
        Duration::from_micros(us)
    }

    #[test]
    fn test_speed_clamps_initial_interval() {
        let speed = Speed::new(micros(5), micros(10), micros(100), micros(10));
        assert_eq!(speed.interval(), micros(10));
        let speed = Speed::new(micros(500), micros(10), micros(100), micros(10));
        assert_eq!(speed.interval(), micros(100));
    }

    #[test]
    fn test_speed_stays_in_bounds() {
        let mut speed = Speed::new(micros(30), micros(10), micros(50), micros(15));
        assert_eq!(speed.faster(), micros(15));
        assert_eq!(speed.faster(), micros(10));
        assert_eq!(speed.faster(), micros(10));
        assert_eq!(speed.slower(), micros(25));
        assert_eq!(speed.slower(), micros(40));
        assert_eq!(speed.slower(), micros(50));
        assert_eq!(speed.slower(), micros(50));
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Running.label(), "Running");
        assert_eq!(Mode::Paused.label(), "Paused");
    }
}
