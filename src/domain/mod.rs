mod cell;
mod error;
mod grid;
mod rules;
mod patterns;
mod seed;
mod stepper;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use rules::{LifeRule, MIN_NEI, MAX_NEI, BORNS, neighbor_count, next_state};
pub use patterns::{Pattern, presets};
pub use seed::{seed, DEFAULT_BIRTH_PROBABILITY};
pub use stepper::{advance, StepSummary};
