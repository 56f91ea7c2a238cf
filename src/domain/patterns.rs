use super::{Cell, Grid, GridError};

/// A named arrangement of live cells that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box is derived from the live-cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: &'static [(usize, usize)]) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        self.cells
    }

    /// Stamp the pattern with its top-left corner at (x, y).
    /// Nothing is written unless the whole pattern fits.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) -> Result<(), GridError> {
        let (right, bottom) = (x + self.width - 1, y + self.height - 1);
        if !grid.contains(right, bottom) {
            let (width, height) = grid.dimensions();
            return Err(GridError::OutOfBounds { x: right, y: bottom, width, height });
        }
        for (dx, dy) in self.cells {
            grid.set(x + dx, y + dy, Cell::Alive)?;
        }
        Ok(())
    }

    /// Stamp the pattern in the middle of the grid
    pub fn place_centered(&self, grid: &mut Grid) -> Result<(), GridError> {
        let (width, height) = grid.dimensions();
        let x = width.saturating_sub(self.width) / 2;
        let y = height.saturating_sub(self.height) / 2;
        self.place_on(grid, x, y)
    }
}

/// Small library of classic patterns
pub mod presets {
    use super::Pattern;

    pub fn blinker() -> Pattern {
        Pattern::new("blinker", "Oscillator (period 2)", &[(0, 0), (1, 0), (2, 0)])
    }

    pub fn block() -> Pattern {
        Pattern::new("block", "Still life", &[(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Spaceship, travels diagonally (period 4)",
            &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
        )
    }

    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            "Lightweight spaceship (period 4)",
            &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
        )
    }

    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah, settles after 1103 generations",
            &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), block(), glider(), toad(), beacon(), lwss(), r_pentomino()]
    }

    /// Case-insensitive lookup by name
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LifeRule, advance};

    #[test]
    fn test_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(presets::lwss().width, 5);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(presets::by_name("Glider").map(|p| p.name), Some("glider"));
        assert!(presets::by_name("gosper").is_none());
    }

    #[test]
    fn test_place_out_of_bounds_writes_nothing() {
        let mut grid = Grid::new(4, 4).unwrap();
        let err = presets::lwss().place_on(&mut grid, 0, 0).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_place_centered() {
        let mut grid = Grid::new(7, 5).unwrap();
        presets::blinker().place_centered(&mut grid).unwrap();
        assert_eq!(grid.get(2, 2), Some(Cell::Alive));
        assert_eq!(grid.get(3, 2), Some(Cell::Alive));
        assert_eq!(grid.get(4, 2), Some(Cell::Alive));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let mut grid = Grid::new(10, 10).unwrap();
        presets::glider().place_on(&mut grid, 1, 1).unwrap();
        let rule = LifeRule::default();
        for _ in 0..4 {
            advance(&mut grid, &rule);
        }
        let mut expected = Grid::new(10, 10).unwrap();
        presets::glider().place_on(&mut expected, 2, 2).unwrap();
        assert!(grid.same_generation(&expected));
    }
}
