//! Puzzle session state machine

mod session;

pub use session::{Session, Status, SubmitError};
