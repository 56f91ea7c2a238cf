mod controller;
mod scheduler;
mod session;

pub use controller::{Direction, Event, Outcome};
pub use scheduler::{TickScheduler, Wait};
pub use session::{Cursor, Mode, Session, Speed};
