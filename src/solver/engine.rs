//! Main Wordle assistant interface

use super::constraints::derive_constraints;
use super::frequency::FrequencyTable;
use super::ranker::{Criterion, DEFAULT_SUGGESTIONS, Scored, rank};
use crate::core::{Outcome, Word};

/// Default round cap
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Tunables shared by every game a solver plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of ranked suggestions offered each round
    pub max_suggestions: usize,
    /// Rounds allowed before the game is lost
    pub max_rounds: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_SUGGESTIONS,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Main Wordle assistant
///
/// Owns the frequency table and borrows the guessable words. Stateless between calls:
/// the shrinking candidate pool belongs to whoever drives the rounds.
pub struct Solver<'a> {
    table: FrequencyTable,
    words: &'a [Word],
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `reference`: Words the letter frequencies are counted over (the solution set)
    /// - `words`: All words that may be guessed, in suggestion tie-break order
    /// - `config`: Suggestion and round limits
    #[must_use]
    pub fn new(reference: &[Word], words: &'a [Word], config: SolverConfig) -> Self {
        Self {
            table: FrequencyTable::build(reference),
            words,
            config,
        }
    }

    /// The frequency table used for scoring
    #[must_use]
    pub const fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// All guessable words
    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The starting candidate pool: every guessable word
    #[must_use]
    pub fn initial_pool(&self) -> Vec<&'a Word> {
        self.words.iter().collect()
    }

    /// Find a guessable word by its text
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&'a Word> {
        self.words.iter().find(|w| w.text() == text)
    }

    /// Top suggestions from `pool` that pass every criterion
    #[must_use]
    pub fn suggest<C: Criterion>(&self, pool: &[&'a Word], criteria: &[C]) -> Vec<Scored<'a>> {
        rank(pool, &self.table, criteria, self.config.max_suggestions)
    }

    /// Narrow `pool` to the words consistent with `guess` having received `outcome`
    #[must_use]
    pub fn narrow(&self, pool: &[&'a Word], guess: &Word, outcome: &Outcome) -> Vec<&'a Word> {
        let narrowed = derive_constraints(guess, outcome).filter(pool);
        debug_assert!(narrowed.len() <= pool.len());
        narrowed
    }

    /// Replay a history of rounds from the initial pool
    ///
    /// Returns candidates consistent with every (guess, outcome) pair.
    #[must_use]
    pub fn candidates(&self, history: &[(Word, Outcome)]) -> Vec<&'a Word> {
        history
            .iter()
            .fold(self.initial_pool(), |pool, (guess, outcome)| {
                self.narrow(&pool, guess, outcome)
            })
    }
}
