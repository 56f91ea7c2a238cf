use super::{Cell, GridError};

/// Grid owns the cell buffers of the simulation.
///
/// Two buffers of identical layout are kept: `current` is the generation
/// readers see, `next` is scratch space written during a step. Committing a
/// step swaps the two vectors, so no reader can observe a half-built
/// generation and the commit costs nothing per cell.
///
/// Coordinates outside `[0, width) x [0, height)` are permanently dead.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead in both buffers
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = Self::cell_count(width, height)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            current: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
        })
    }

    /// Cells needed for a `width x height` grid; `None` if either side is
    /// zero or the product does not fit in `usize`.
    pub fn cell_count(width: usize, height: usize) -> Option<usize> {
        if width == 0 || height == 0 {
            return None;
        }
        width.checked_mul(height)
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y)
            .then(|| self.current[self.get_index(x, y)])
    }

    /// State at a possibly off-grid position; the border reads as dead.
    pub fn cell(&self, x: isize, y: isize) -> Cell {
        if x < 0 || y < 0 {
            return Cell::Dead;
        }
        self.get(x as usize, y as usize).unwrap_or(Cell::Dead)
    }

    /// Liveness at a possibly off-grid position. Never fails.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.cell(x, y).is_alive()
    }

    /// Write a cell of the current generation
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.checked_index(x, y)?;
        self.current[idx] = cell;
        Ok(())
    }

    /// Flip a cell of the current generation, returning its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<Cell, GridError> {
        let idx = self.checked_index(x, y)?;
        let flipped = self.current[idx].toggle();
        self.current[idx] = flipped;
        Ok(flipped)
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get_index(x, y))
    }

    /// Make the scratch buffer the current generation.
    /// The previous generation becomes the new scratch buffer.
    pub fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Take the scratch buffer out so a step can fill it while reading
    /// `current` through `&self`. Must be handed back with [`Grid::commit`].
    pub(crate) fn take_scratch(&mut self) -> Vec<Cell> {
        std::mem::take(&mut self.next)
    }

    /// Put a filled scratch buffer back and swap it in
    pub(crate) fn commit(&mut self, scratch: Vec<Cell>) {
        debug_assert_eq!(scratch.len(), self.current.len());
        self.next = scratch;
        self.swap_buffers();
    }

    /// Set every cell of the current generation to dead
    pub fn clear(&mut self) {
        self.current.fill(Cell::Dead);
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.current
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx % self.width, idx / self.width, *cell))
    }

    /// Mutable access to every cell of the current generation
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.current
    }

    /// True when both grids hold the same current generation
    pub fn same_generation(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions() && self.current == other.current
    }
}
