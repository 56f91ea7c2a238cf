//! Interaction state machine.
//!
//! The controller consumes abstract events; where they come from (keyboard,
//! tests, scripts) is not its concern. Events that have no meaning in the
//! current mode are ignored.

use std::time::Duration;

use log::{debug, info, warn};

use super::session::{Cursor, Mode, Session};
use crate::domain::{advance, seed, Cell, StepSummary};

/// Cursor movement direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Abstract input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    PauseToggle,
    StepOnce,
    ToggleCell,
    MoveCursor(Direction),
    SpeedUp,
    SpeedDown,
    /// Kill every cell and pause
    Clear,
    /// Re-populate randomly and pause
    Reseed,
}

/// What handling an event did to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Paused,
    Resumed,
    CursorMoved(Cursor),
    CellToggled(Cell),
    Stepped(StepSummary),
    SpeedChanged(Duration),
    Reset,
}

impl Outcome {
    /// Whether the screen needs a redraw
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Outcome::Ignored)
    }
}

impl Cursor {
    /// Move one cell, clamped to a `width x height` grid
    pub fn moved(self, direction: Direction, width: usize, height: usize) -> Self {
        let Cursor { x, y } = self;
        match direction {
            Direction::Up => Cursor { x, y: y.saturating_sub(1) },
            Direction::Down => Cursor { x, y: (y + 1).min(height.saturating_sub(1)) },
            Direction::Left => Cursor { x: x.saturating_sub(1), y },
            Direction::Right => Cursor { x: (x + 1).min(width.saturating_sub(1)), y },
        }
    }
}

impl Session {
    /// Apply one input event
    pub fn handle(&mut self, event: Event) -> Outcome {
        match (self.mode, event) {
            (Mode::Running, Event::PauseToggle) => {
                self.mode = Mode::Paused;
                info!("paused at generation {}", self.generation);
                Outcome::Paused
            }
            (Mode::Paused, Event::PauseToggle) => {
                self.mode = Mode::Running;
                info!("resumed at generation {}", self.generation);
                Outcome::Resumed
            }
            (Mode::Paused, Event::MoveCursor(direction)) => {
                let (width, height) = self.grid.dimensions();
                let moved = self.cursor.moved(direction, width, height);
                if moved == self.cursor {
                    return Outcome::Ignored;
                }
                self.cursor = moved;
                Outcome::CursorMoved(moved)
            }
            (Mode::Paused, Event::ToggleCell) => {
                let Cursor { x, y } = self.cursor;
                match self.grid.toggle(x, y) {
                    Ok(cell) => Outcome::CellToggled(cell),
                    Err(err) => {
                        warn!("toggle rejected: {err}");
                        Outcome::Ignored
                    }
                }
            }
            (Mode::Paused, Event::StepOnce) => Outcome::Stepped(self.step()),
            (Mode::Running, Event::SpeedUp) => Outcome::SpeedChanged(self.speed.faster()),
            (Mode::Running, Event::SpeedDown) => Outcome::SpeedChanged(self.speed.slower()),
            (_, Event::Clear) => {
                self.grid.clear();
                self.reset_generation();
                Outcome::Reset
            }
            (_, Event::Reseed) => {
                seed(&mut self.grid, self.birth_probability, &mut self.rng);
                self.reset_generation();
                Outcome::Reset
            }
            _ => Outcome::Ignored,
        }
    }

    /// Timer tick: one generation while running, nothing while paused
    pub fn tick(&mut self) -> Option<StepSummary> {
        self.is_running().then(|| self.step())
    }

    fn step(&mut self) -> StepSummary {
        let summary = advance(&mut self.grid, &self.rule);
        self.generation += 1;
        debug!(
            "generation {}: +{} -{} population {}",
            self.generation, summary.born, summary.died, summary.population
        );
        summary
    }

    fn reset_generation(&mut self) {
        self.generation = 0;
        self.mode = Mode::Paused;
        info!("board reset, population {}", self.grid.population());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Speed;
    use crate::domain::Grid;
    use rand::{SeedableRng, rngs::StdRng};

    fn session(width: usize, height: usize) -> Session {
        Session::new(Grid::new(width, height).unwrap(), StdRng::seed_from_u64(9))
    }

    fn move_to(session: &mut Session, x: usize, y: usize) {
        for _ in 0..x {
            session.handle(Event::MoveCursor(Direction::Right));
        }
        for _ in 0..y {
            session.handle(Event::MoveCursor(Direction::Down));
        }
    }

    #[test]
    fn test_starts_paused() {
        let session = session(5, 5);
        assert_eq!(session.mode(), Mode::Paused);
        assert_eq!(session.cursor(), Cursor { x: 0, y: 0 });
    }

    #[test]
    fn test_pause_toggle_round_trip() {
        let mut session = session(5, 5);
        assert_eq!(session.handle(Event::PauseToggle), Outcome::Resumed);
        assert!(session.is_running());
        assert_eq!(session.handle(Event::PauseToggle), Outcome::Paused);
        assert!(!session.is_running());
    }

    #[test]
    fn test_cursor_clamped_at_origin() {
        let mut session = session(4, 3);
        assert_eq!(session.handle(Event::MoveCursor(Direction::Up)), Outcome::Ignored);
        assert_eq!(session.handle(Event::MoveCursor(Direction::Left)), Outcome::Ignored);
        assert_eq!(session.cursor(), Cursor { x: 0, y: 0 });
    }

    #[test]
    fn test_cursor_clamped_at_far_corner() {
        let mut session = session(4, 3);
        move_to(&mut session, 10, 10);
        assert_eq!(session.cursor(), Cursor { x: 3, y: 2 });
        assert_eq!(session.handle(Event::MoveCursor(Direction::Down)), Outcome::Ignored);
        assert_eq!(session.handle(Event::MoveCursor(Direction::Right)), Outcome::Ignored);
        assert_eq!(session.cursor(), Cursor { x: 3, y: 2 });
    }

    #[test]
    fn test_cursor_on_single_cell_grid() {
        let cursor = Cursor::default();
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(cursor.moved(direction, 1, 1), cursor);
        }
    }

    #[test]
    fn test_cursor_survives_pause_cycle() {
        let mut session = session(6, 6);
        move_to(&mut session, 2, 3);
        session.handle(Event::PauseToggle);
        session.tick();
        session.handle(Event::PauseToggle);
        assert_eq!(session.cursor(), Cursor { x: 2, y: 3 });
    }

    #[test]
    fn test_moves_ignored_while_running() {
        let mut session = session(6, 6).with_mode(Mode::Running);
        assert_eq!(session.handle(Event::MoveCursor(Direction::Right)), Outcome::Ignored);
        assert_eq!(session.handle(Event::ToggleCell), Outcome::Ignored);
        assert_eq!(session.handle(Event::StepOnce), Outcome::Ignored);
        assert_eq!(session.cursor(), Cursor::default());
        assert_eq!(session.grid().population(), 0);
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut session = session(5, 5);
        move_to(&mut session, 1, 2);
        assert_eq!(session.handle(Event::ToggleCell), Outcome::CellToggled(Cell::Alive));
        assert_eq!(session.grid().get(1, 2), Some(Cell::Alive));
        assert_eq!(session.handle(Event::ToggleCell), Outcome::CellToggled(Cell::Dead));
        assert_eq!(session.grid().get(1, 2), Some(Cell::Dead));
    }

    #[test]
    fn test_step_once_stays_paused() {
        let mut session = session(6, 5);
        for x in 1..=3 {
            session.grid.set(x, 1, Cell::Alive).unwrap();
        }
        let outcome = session.handle(Event::StepOnce);
        assert!(matches!(outcome, Outcome::Stepped(StepSummary { population: 3, .. })));
        assert_eq!(session.mode(), Mode::Paused);
        assert_eq!(session.generation(), 1);
        assert_eq!(session.grid().get(2, 0), Some(Cell::Alive));
        assert_eq!(session.grid().get(1, 1), Some(Cell::Dead));
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut session = session(5, 5);
        assert_eq!(session.tick(), None);
        assert_eq!(session.generation(), 0);
        session.handle(Event::PauseToggle);
        assert!(session.tick().is_some());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_speed_changes_only_while_running() {
        let speed = Speed::new(
            Duration::from_micros(50),
            Duration::from_micros(10),
            Duration::from_micros(100),
            Duration::from_micros(20),
        );
        let mut session = session(5, 5).with_speed(speed);
        assert_eq!(session.handle(Event::SpeedUp), Outcome::Ignored);
        assert_eq!(session.interval(), Duration::from_micros(50));

        session.handle(Event::PauseToggle);
        assert_eq!(
            session.handle(Event::SpeedUp),
            Outcome::SpeedChanged(Duration::from_micros(30))
        );
        session.handle(Event::SpeedUp);
        session.handle(Event::SpeedUp);
        assert_eq!(session.interval(), Duration::from_micros(10));
        for _ in 0..10 {
            session.handle(Event::SpeedDown);
        }
        assert_eq!(session.interval(), Duration::from_micros(100));
    }

    #[test]
    fn test_clear_and_reseed_pause_and_reset_generation() {
        let mut session = session(20, 20)
            .with_birth_probability(1.0)
            .with_mode(Mode::Running);
        session.tick();
        assert_eq!(session.handle(Event::Reseed), Outcome::Reset);
        assert_eq!(session.grid().population(), 400);
        assert_eq!(session.generation(), 0);
        assert_eq!(session.mode(), Mode::Paused);

        assert_eq!(session.handle(Event::Clear), Outcome::Reset);
        assert_eq!(session.grid().population(), 0);
    }

    #[test]
    fn test_out_of_range_cursor_toggle_is_noop() {
        let mut session = session(3, 3);
        session.cursor = Cursor { x: 7, y: 7 };
        assert_eq!(session.handle(Event::ToggleCell), Outcome::Ignored);
        assert_eq!(session.grid().population(), 0);
    }
}
