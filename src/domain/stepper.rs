//! Generation stepping.
//!
//! A step reads only the generation that existed before it started and
//! writes only the scratch buffer; the new generation becomes visible in a
//! single swap once every cell has been computed.

use super::{Cell, Grid, LifeRule, rules::neighbor_count};

/// What a single generation step changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub born: usize,
    pub died: usize,
    pub population: usize,
}

impl StepSummary {
    pub const fn changed(&self) -> bool {
        self.born > 0 || self.died > 0
    }
}

/// Advance the grid by one generation under `rule`
pub fn advance(grid: &mut Grid, rule: &LifeRule) -> StepSummary {
    let (width, height) = grid.dimensions();
    let mut scratch = grid.take_scratch();
    let mut summary = StepSummary::default();

    for y in 0..height {
        for x in 0..width {
            let current = grid.cell(x as isize, y as isize);
            let next = rule.next_state(current, neighbor_count(grid, x, y));
            match (current, next) {
                (Cell::Dead, Cell::Alive) => summary.born += 1,
                (Cell::Alive, Cell::Dead) => summary.died += 1,
                _ => {}
            }
            if next.is_alive() {
                summary.population += 1;
            }
            scratch[y * width + x] = next;
        }
    }

    grid.commit(scratch);
    summary
}
