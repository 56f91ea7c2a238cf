use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use term_life::{
    app::{self, RunMode},
    config::AppConfig,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Conway's Game of Life in the terminal", long_about = None)]
struct Args {
    /// Interactive editing or hands-off watching
    #[arg(short, long, value_enum, default_value_t = RunMode::Interactive)]
    mode: RunMode,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width (defaults to the terminal size, or 200 in watch mode)
    #[arg(long)]
    width: Option<usize>,

    /// Board height (defaults to the terminal size, or 50 in watch mode)
    #[arg(long)]
    height: Option<usize>,

    /// Chance that a cell starts alive
    #[arg(short, long)]
    probability: Option<f64>,

    /// Seed for a reproducible board
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start from a preset (blinker, block, glider, toad, beacon, lwss, r-pentomino)
    #[arg(long)]
    pattern: Option<String>,

    /// Tick interval in microseconds
    #[arg(short, long)]
    interval: Option<u64>,

    /// Write logs here; the screen itself is owned by the board
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<(AppConfig, RunMode)> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if self.width.is_some() {
            config.grid.width = self.width;
        }
        if self.height.is_some() {
            config.grid.height = self.height;
        }
        if let Some(p) = self.probability {
            config.seed.birth_probability = p;
        }
        if self.seed.is_some() {
            config.seed.rng_seed = self.seed;
        }
        if self.pattern.is_some() {
            config.seed.pattern = self.pattern;
        }
        if let Some(interval) = self.interval {
            config.speed.interval_us = Some(interval);
        }
        config.validate()?;
        Ok((config, self.mode))
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let file = log_file
        .map(|path| {
            File::create(path).with_context(|| format!("cannot open log file {}", path.display()))
        })
        .transpose()?;
    app::log_builder(file).init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let (config, mode) = args.into_config()?;
    log::info!("starting in {mode:?} mode");
    app::run(&config, mode)
}
