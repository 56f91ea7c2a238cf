use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::rendering::FRAME_MARGIN;

/// Raw-mode alternate screen for the lifetime of the guard.
/// Dropping it restores the terminal even when the run loop bails out early.
pub struct TerminalGuard<W: Write = Stdout> {
    out: W,
}

impl TerminalGuard<Stdout> {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Self::setup(io::stdout())
    }
}

impl<W: Write> TerminalGuard<W> {
    /// Switch `out` to the alternate screen. Raw mode is already on, so the
    /// guard exists before the first write and a failure still restores it.
    fn setup(out: W) -> io::Result<Self> {
        let mut guard = Self { out };
        execute!(
            guard.out,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(guard)
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Current terminal size as (columns, rows)
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::Clear(terminal::ClearType::All))
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = self.out.flush();
    }
}

/// Grid size that fits a `cols x rows` terminal inside the one-cell frame.
/// May be zero on tiny terminals; grid creation rejects that.
pub fn play_area((cols, rows): (u16, u16)) -> (usize, usize) {
    let margin = 2 * FRAME_MARGIN;
    (
        cols.saturating_sub(margin) as usize,
        rows.saturating_sub(margin) as usize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Fails its first write, records everything after
    struct FlakyOut {
        failed: bool,
        written: Rc<RefCell<Vec<u8>>>,
    }

    impl Write for FlakyOut {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::other("terminal went away"));
            }
            self.written.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_setup_still_restores_terminal() {
        let written = Rc::new(RefCell::new(Vec::new()));
        let out = FlakyOut { failed: false, written: Rc::clone(&written) };
        assert!(TerminalGuard::setup(out).is_err());

        let restored = String::from_utf8_lossy(&written.borrow()).into_owned();
        assert!(restored.contains("\x1b[?1049l"), "leave sequence missing: {restored:?}");
        assert!(restored.contains("\x1b[?25h"), "show-cursor sequence missing: {restored:?}");
    }

    #[test]
    fn test_play_area_subtracts_frame() {
        assert_eq!(play_area((80, 24)), (78, 22));
        assert_eq!(play_area((202, 52)), (200, 50));
    }

    #[test]
    fn test_tiny_terminal_has_no_play_area() {
        assert_eq!(play_area((2, 1)), (0, 0));
        assert_eq!(play_area((3, 3)), (1, 1));
    }
}
