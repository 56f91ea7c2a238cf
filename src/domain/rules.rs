use serde::{Deserialize, Serialize};

use super::{Cell, Grid};

/// Fewest live neighbors a live cell needs to survive.
pub const MIN_NEI: u8 = 2;
/// Most live neighbors a live cell can have and still survive.
pub const MAX_NEI: u8 = 3;
/// Exact live-neighbor count that brings a dead cell to life.
pub const BORNS: u8 = 3;

/// Offsets of the 8-cell Moore neighborhood
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Survival/birth thresholds of a Life-like automaton.
/// The default is Conway's Game of Life (B3/S23).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeRule {
    pub min_neighbors: u8,
    pub max_neighbors: u8,
    pub births: u8,
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::conway()
    }
}

impl LifeRule {
    pub const fn conway() -> Self {
        Self {
            min_neighbors: MIN_NEI,
            max_neighbors: MAX_NEI,
            births: BORNS,
        }
    }

    /// Thresholds must describe a non-empty survival window within 0..=8
    pub const fn is_valid(&self) -> bool {
        self.min_neighbors <= self.max_neighbors && self.max_neighbors <= 8 && self.births <= 8
    }

    /// Rule in B/S notation, e.g. "B3/S23"
    pub fn notation(&self) -> String {
        let survive: String = (self.min_neighbors..=self.max_neighbors)
            .map(|n| n.to_string())
            .collect();
        format!("B{}/S{}", self.births, survive)
    }

    /// Compute the next state of a cell:
    /// 1. Live cell with MIN_NEI..=MAX_NEI neighbors survives
    /// 2. Dead cell with exactly BORNS neighbors becomes alive
    /// 3. All other cases result in a dead cell
    pub const fn next_state(&self, current: Cell, neighbors: u8) -> Cell {
        match current {
            Cell::Alive if neighbors >= self.min_neighbors && neighbors <= self.max_neighbors => {
                Cell::Alive
            }
            Cell::Dead if neighbors == self.births => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Next state under the canonical B3/S23 rule
pub const fn next_state(current: Cell, neighbors: u8) -> Cell {
    LifeRule::conway().next_state(current, neighbors)
}

/// Count live cells in the Moore neighborhood of (x, y).
/// Off-grid neighbors are dead, so edge and corner cells see fewer candidates.
pub fn neighbor_count(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.is_alive(x + dx, y + dy))
        .count() as u8
}
