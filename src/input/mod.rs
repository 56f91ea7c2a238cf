use std::io;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::application::{Direction, Event, Mode, Wait};

/// What a key press asks of the run loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Control(Event),
    /// Window size changed; redraw
    Redraw,
    Quit,
}

/// Which key bindings are live
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bindings {
    /// Full pause/edit/step/speed controls
    Interactive,
    /// Only quit is honored
    Watch,
}

/// Translate a key press. Arrow keys move the cursor while paused and
/// change speed while running.
pub fn map_key(key: KeyEvent, mode: Mode, bindings: Bindings) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
    if quit {
        return Some(Command::Quit);
    }
    if bindings == Bindings::Watch {
        return None;
    }

    let event = match (key.code, mode) {
        (KeyCode::Char(' ') | KeyCode::Char('p'), _) => Event::PauseToggle,
        (KeyCode::Char('n') | KeyCode::Char('s'), _) => Event::StepOnce,
        (KeyCode::Enter | KeyCode::Char('t'), _) => Event::ToggleCell,
        (KeyCode::Char('c'), _) => Event::Clear,
        (KeyCode::Char('r'), _) => Event::Reseed,
        (KeyCode::Char('+') | KeyCode::Char('='), _) => Event::SpeedUp,
        (KeyCode::Char('-'), _) => Event::SpeedDown,
        (KeyCode::Up, Mode::Running) => Event::SpeedUp,
        (KeyCode::Down, Mode::Running) => Event::SpeedDown,
        (KeyCode::Up | KeyCode::Char('k'), Mode::Paused) => Event::MoveCursor(Direction::Up),
        (KeyCode::Down | KeyCode::Char('j'), Mode::Paused) => Event::MoveCursor(Direction::Down),
        (KeyCode::Left | KeyCode::Char('h'), Mode::Paused) => Event::MoveCursor(Direction::Left),
        (KeyCode::Right | KeyCode::Char('l'), Mode::Paused) => Event::MoveCursor(Direction::Right),
        _ => return None,
    };
    Some(Command::Control(event))
}

/// Wait for at most one command.
///
/// `Wait::Forever` blocks on the terminal; `Wait::For` polls with a timeout
/// and returns `None` when it expires. Unmapped keys also yield `None`.
pub fn next_command(wait: Wait, mode: Mode, bindings: Bindings) -> io::Result<Option<Command>> {
    if let Wait::For(timeout) = wait {
        if !event::poll(timeout)? {
            return Ok(None);
        }
    }
    Ok(match event::read()? {
        TermEvent::Key(key) => map_key(key, mode, bindings),
        TermEvent::Resize(..) => Some(Command::Redraw),
        _ => None,
    })
}
