//! Command implementations

pub mod eval;
pub mod simple;

pub use eval::{EvalResult, eval_guess};
pub use simple::run_simple;
