// Domain layer - grid, rules, stepping, seeding
pub mod domain;

// Application layer - session state machine and tick scheduling
pub mod application;

// Infrastructure layer - terminal, rendering, input
pub mod terminal;
pub mod rendering;
pub mod input;

pub mod app;
pub mod config;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, LifeRule, Pattern, StepSummary, advance, presets};
pub use application::{Direction, Event, Mode, Session};
pub use config::{AppConfig, ConfigError};
