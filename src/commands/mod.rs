//! Command implementations

pub mod evaluate;
pub mod input;
pub mod simple;
pub mod solve;
pub mod suggest;
pub mod test_all;

pub use evaluate::evaluate_words;
pub use input::{GuessError, resolve_guess};
pub use simple::{run_session, run_simple};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use suggest::{SuggestResult, parse_round, suggest_next};
pub use test_all::{
    Selection, StrategyStatistics, print_test_all_statistics, run_test_all, select_solutions,
};
