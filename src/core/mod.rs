//! Core domain types for Hardle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod marks;
mod score;
mod word;

pub use marks::{LetterMarks, Mark};
pub use score::{LetterScore, Score};
pub use word::{Word, WordError};
