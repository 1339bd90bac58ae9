//! Wordle assistant engine
//!
//! Letter frequencies, constraint derivation from feedback, candidate ranking and the
//! round loop that ties them together.

mod constraints;
mod engine;
mod frequency;
mod game;
mod ranker;
pub mod strategy;

pub use constraints::{ConstraintSet, Predicate, PredicateKind, derive_constraints};
pub use engine::{DEFAULT_MAX_ROUNDS, Solver, SolverConfig};
pub use frequency::FrequencyTable;
pub use game::{Game, GameResult, GameStatus, play_known};
pub use ranker::{Criterion, DEFAULT_SUGGESTIONS, Scored, rank, score};
pub use strategy::{Strategy, WordFilter};
