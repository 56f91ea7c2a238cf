use std::fs::File;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::application::{Mode, Outcome, Session, TickScheduler};
use crate::config::{AppConfig, INTERACTIVE_INTERVAL_US, WATCH_HEIGHT, WATCH_INTERVAL_US, WATCH_WIDTH};
use crate::domain::{presets, seed, Grid};
use crate::input::{self, Bindings, Command};
use crate::rendering;
use crate::terminal::{play_area, TerminalGuard};

/// How the board is driven
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Starts paused; full edit, step and speed controls
    #[default]
    Interactive,
    /// Fixed 200x50 board that runs on its own; only quit is accepted
    Watch,
}

impl RunMode {
    pub const fn bindings(self) -> Bindings {
        match self {
            RunMode::Interactive => Bindings::Interactive,
            RunMode::Watch => Bindings::Watch,
        }
    }

    /// Tick interval when none is configured
    pub const fn default_interval_us(self) -> u64 {
        match self {
            RunMode::Interactive => INTERACTIVE_INTERVAL_US,
            RunMode::Watch => WATCH_INTERVAL_US,
        }
    }

    const fn initial_mode(self) -> Mode {
        match self {
            RunMode::Interactive => Mode::Paused,
            RunMode::Watch => Mode::Running,
        }
    }
}

/// Logger for a run. The board owns the screen, so without a log file only
/// errors reach stderr no matter what `RUST_LOG` asks for.
pub fn log_builder(log_file: Option<File>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    match log_file {
        Some(file) => {
            builder
                .filter_level(log::LevelFilter::Info)
                .parse_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Error);
        }
    }
    builder
}

/// Grid size for a run: explicit config wins, then the mode's default
/// (terminal play area or the fixed watch size).
pub fn grid_size(config: &AppConfig, run_mode: RunMode, terminal: (u16, u16)) -> (usize, usize) {
    let (default_w, default_h) = match run_mode {
        RunMode::Interactive => play_area(terminal),
        RunMode::Watch => (WATCH_WIDTH, WATCH_HEIGHT),
    };
    (
        config.grid.width.unwrap_or(default_w),
        config.grid.height.unwrap_or(default_h),
    )
}

/// Build the session from a validated config
pub fn build_session(config: &AppConfig, run_mode: RunMode, (width, height): (usize, usize)) -> Result<Session> {
    let mut grid = Grid::new(width, height).context("cannot create the board")?;
    let mut rng = match config.seed.rng_seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    match config.seed.pattern.as_deref() {
        Some(name) => {
            let pattern = presets::by_name(name)
                .with_context(|| format!("unknown pattern '{name}'"))?;
            pattern
                .place_centered(&mut grid)
                .with_context(|| format!("pattern '{name}' does not fit the board"))?;
        }
        None => seed(&mut grid, config.seed.birth_probability, &mut rng),
    }
    info!(
        "board {}x{} seeded with {} live cells, rule {}",
        width,
        height,
        grid.population(),
        config.rule.notation()
    );

    Ok(Session::new(grid, rng)
        .with_mode(run_mode.initial_mode())
        .with_rule(config.rule)
        .with_speed(config.speed.to_speed(run_mode.default_interval_us()))
        .with_birth_probability(config.seed.birth_probability))
}

/// Run the terminal front end until the user quits
pub fn run(config: &AppConfig, run_mode: RunMode) -> Result<()> {
    let mut term = TerminalGuard::enter().context("failed to set up the terminal")?;
    let mut viewport = term.size()?;
    let size = grid_size(config, run_mode, viewport);
    let mut session = build_session(config, run_mode, size)?;

    let bindings = run_mode.bindings();
    let show_cursor = bindings == Bindings::Interactive;
    let mut scheduler = TickScheduler::new(Instant::now());
    let mut dirty = true;

    loop {
        if dirty {
            rendering::draw(term.out(), &session, show_cursor, viewport)?;
            dirty = false;
        }

        let wait = scheduler.wait(session.mode(), session.interval(), Instant::now());
        match input::next_command(wait, session.mode(), bindings)? {
            Some(Command::Quit) => break,
            Some(Command::Redraw) => {
                viewport = term.size()?;
                term.clear()?;
                dirty = true;
            }
            Some(Command::Control(event)) => {
                let outcome = session.handle(event);
                if outcome == Outcome::Resumed {
                    scheduler.reset(Instant::now());
                }
                dirty |= outcome.is_visible();
            }
            None => {}
        }

        let now = Instant::now();
        if session.is_running() && scheduler.due(session.interval(), now) {
            session.tick();
            scheduler.reset(now);
            dirty = true;
        }
    }

    debug!("quit at generation {}", session.generation());
    Ok(())
}
