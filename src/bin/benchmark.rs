//! Generation throughput on a few board sizes

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use term_life::domain::{advance, seed, Grid, LifeRule, DEFAULT_BIRTH_PROBABILITY};

fn benchmark_advance(width: usize, height: usize, iterations: u32) -> anyhow::Result<f64> {
    let rule = LifeRule::default();
    let mut grid = Grid::new(width, height)?;
    seed(&mut grid, DEFAULT_BIRTH_PROBABILITY * 4.0, &mut StdRng::seed_from_u64(0xC0FFEE));

    let start = Instant::now();
    for _ in 0..iterations {
        advance(&mut grid, &rule);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    let sizes = [(80, 24), (200, 50), (500, 500), (1000, 1000)];

    println!("{:>12} {:>12} {:>14}", "board", "ms/gen", "Mcells/s");
    for (width, height) in sizes {
        let cells = (width * height) as f64;
        let iterations = (2_000_000.0 / cells).clamp(10.0, 1000.0) as u32;
        let ms = benchmark_advance(width, height, iterations)?;
        let throughput = cells / (ms / 1000.0) / 1_000_000.0;
        println!("{:>12} {:>12.3} {:>14.1}", format!("{width}x{height}"), ms, throughput);
    }
    Ok(())
}
