use rand::Rng;

use super::{Cell, Grid};

/// Chance that a cell starts alive when the grid is populated
pub const DEFAULT_BIRTH_PROBABILITY: f64 = 0.07;

/// Populate every cell of the current generation: alive with
/// `birth_probability`, dead otherwise. Probabilities outside 0..=1 saturate.
pub fn seed<R: Rng>(grid: &mut Grid, birth_probability: f64, rng: &mut R) {
    let p = if birth_probability.is_nan() { 0.0 } else { birth_probability.clamp(0.0, 1.0) };
    grid.cells_mut()
        .iter_mut()
        .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(p)));
}
