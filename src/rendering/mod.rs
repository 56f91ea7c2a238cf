//! Character-cell rendering.
//!
//! The play area sits inside a one-cell frame: grid cell (x, y) is drawn at
//! terminal column x + 1, row y + 1. The frame never overlaps grid cells.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate},
};

use crate::application::{Mode, Session};
use crate::domain::{Cell, Grid};

pub const ALIVE_GLYPH: char = '#';
pub const DEAD_GLYPH: char = ' ';

/// Terminal offset of grid cell (0, 0)
pub const FRAME_MARGIN: u16 = 1;

pub const fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Alive => ALIVE_GLYPH,
        Cell::Dead => DEAD_GLYPH,
    }
}

/// One grid row as glyphs
pub fn row_text(grid: &Grid, y: usize) -> String {
    (0..grid.width())
        .map(|x| glyph(Cell::from_alive(grid.is_alive(x as isize, y as isize))))
        .collect()
}

/// Status text embedded in the top edge of the frame
pub fn status_line(session: &Session) -> String {
    let help = match session.mode() {
        Mode::Paused => "spc:run n:step ret:toggle hjkl:move c:clear r:seed q:quit",
        Mode::Running => "spc:pause +/-:speed q:quit",
    };
    format!(
        " {} | gen {} | pop {} | {}ms | {} | {} ",
        session.mode().label(),
        session.generation(),
        session.grid().population(),
        session.interval().as_millis(),
        session.rule().notation(),
        help,
    )
}

/// Whole screen as lines: framed grid with the status in the top edge
pub fn frame_lines(grid: &Grid, status: &str) -> Vec<String> {
    let width = grid.width();
    let title: String = status.chars().take(width).collect();
    let fill = width - title.chars().count();

    let mut lines = Vec::with_capacity(grid.height() + 2);
    lines.push(format!("┌{title}{}┐", "─".repeat(fill)));
    lines.extend((0..grid.height()).map(|y| format!("│{}│", row_text(grid, y))));
    lines.push(format!("└{}┘", "─".repeat(width)));
    lines
}

/// Draw the session, clipped to a `cols x rows` terminal.
/// The edit cursor is shown in reverse video while paused.
pub fn draw<W: Write>(out: &mut W, session: &Session, show_cursor: bool, (cols, rows): (u16, u16)) -> io::Result<()> {
    queue!(out, BeginSynchronizedUpdate)?;
    let lines = frame_lines(session.grid(), &status_line(session));
    for (row, line) in lines.iter().take(rows as usize).enumerate() {
        let clipped: String = line.chars().take(cols as usize).collect();
        queue!(out, MoveTo(0, row as u16), Print(clipped))?;
    }

    if show_cursor && session.mode() == Mode::Paused {
        let cursor = session.cursor();
        let (col, row) = (cursor.x + FRAME_MARGIN as usize, cursor.y + FRAME_MARGIN as usize);
        if col < cols as usize && row < rows as usize {
            let cell = Cell::from_alive(session.grid().is_alive(cursor.x as isize, cursor.y as isize));
            queue!(
                out,
                MoveTo(col as u16, row as u16),
                SetAttribute(Attribute::Reverse),
                Print(glyph(cell)),
                SetAttribute(Attribute::Reset)
            )?;
        }
    }
    queue!(out, EndSynchronizedUpdate)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Event;
    use rand::{SeedableRng, rngs::StdRng};

    fn session_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Session {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive).unwrap();
        }
        Session::new(grid, StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph(Cell::Alive), '#');
        assert_eq!(glyph(Cell::Dead), ' ');
    }

    #[test]
    fn test_frame_surrounds_grid() {
        let session = session_with(3, 2, &[(0, 0), (2, 1)]);
        let lines = frame_lines(session.grid(), "");
        assert_eq!(lines, vec!["┌───┐", "│#  │", "│  #│", "└───┘"]);
    }

    #[test]
    fn test_status_truncated_to_grid_width() {
        let session = session_with(4, 1, &[]);
        let lines = frame_lines(session.grid(), "abcdefgh");
        assert_eq!(lines[0], "┌abcd┐");
        assert_eq!(lines[0].chars().count(), 6);
    }

    #[test]
    fn test_status_line_reports_state() {
        let mut session = session_with(5, 5, &[(1, 1)]);
        let status = status_line(&session);
        assert!(status.contains("Paused"));
        assert!(status.contains("gen 0"));
        assert!(status.contains("pop 1"));
        assert!(status.contains("B3/S23"));

        session.handle(Event::PauseToggle);
        assert!(status_line(&session).contains("Running"));
    }

    #[test]
    fn test_draw_writes_cells() {
        let session = session_with(3, 3, &[(1, 1)]);
        let mut out = Vec::new();
        draw(&mut out, &session, true, (80, 24)).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("│ # │"));
        assert!(text.contains("└───┘"));
    }

    #[test]
    fn test_draw_clips_to_viewport() {
        let session = session_with(10, 10, &[]);
        let mut out = Vec::new();
        draw(&mut out, &session, false, (4, 2)).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains('└'));
    }
}
