//! Core domain types for Wordle
//!
//! Validated words and feedback outcomes. Everything here is pure and allocation-light;
//! input validation happens in the constructors so the engine can rely on the fixed length.

mod outcome;
mod word;

pub use outcome::{Mark, Outcome, OutcomeError};
pub use word::{Word, WordError};

/// Number of letters in every word, and tiles in every outcome
pub const WORD_LENGTH: usize = 5;
