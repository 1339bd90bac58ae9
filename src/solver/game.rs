//! Round-by-round game state
//!
//! A `Game` threads the shrinking candidate pool through successive rounds and decides
//! when play is over. The solver it borrows stays stateless.

use super::engine::Solver;
use super::ranker::Scored;
use super::strategy::{Strategy, WordFilter};
use crate::core::{Outcome, Word};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Summary of a finished (or abandoned) game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Rounds started, including a final round that ended the game
    pub rounds: usize,
    /// Words played, in order
    pub guesses: Vec<Word>,
    pub won: bool,
}

/// State saved before each play so it can be undone
#[derive(Debug, Clone)]
struct Snapshot<'a> {
    pool: Vec<&'a Word>,
    round: usize,
    played: usize,
}

/// One game against one (known or unknown) solution
pub struct Game<'a> {
    solver: &'a Solver<'a>,
    pool: Vec<&'a Word>,
    round: usize,
    played: Vec<Word>,
    history: Vec<(Word, Outcome)>,
    status: GameStatus,
    undo_stack: Vec<Snapshot<'a>>,
}

impl<'a> Game<'a> {
    /// Start a game with every guessable word as a candidate
    #[must_use]
    pub fn new(solver: &'a Solver<'a>) -> Self {
        Self {
            solver,
            pool: solver.initial_pool(),
            round: 0,
            played: Vec::new(),
            history: Vec::new(),
            status: GameStatus::InProgress,
            undo_stack: Vec::new(),
        }
    }

    /// Current round number (0 before the first round starts)
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Candidates still consistent with every outcome so far
    #[must_use]
    pub fn pool(&self) -> &[&'a Word] {
        &self.pool
    }

    /// Words played so far
    #[must_use]
    pub fn played(&self) -> &[Word] {
        &self.played
    }

    /// (guess, outcome) pairs received so far
    #[must_use]
    pub fn history(&self) -> &[(Word, Outcome)] {
        &self.history
    }

    /// Begin the next round and return its ranked suggestions
    ///
    /// Ends the game when the pool is down to one word (won, that word is played) or is
    /// empty, or when the round cap is exceeded (lost). `filters` narrow only the
    /// suggestions; if they reject everything, unfiltered suggestions are returned.
    pub fn start_round(&mut self, filters: &[&WordFilter]) -> Vec<Scored<'a>> {
        debug_assert_eq!(self.status, GameStatus::InProgress);
        self.round += 1;

        let mut suggestions = self.solver.suggest(&self.pool, filters);
        if suggestions.is_empty() && !filters.is_empty() {
            suggestions = self.solver.suggest::<WordFilter>(&self.pool, &[]);
        }

        match self.pool.as_slice() {
            [only] => {
                self.played.push((*only).clone());
                self.status = GameStatus::Won;
            }
            [] => self.status = GameStatus::Lost,
            _ if self.round > self.solver.config().max_rounds => {
                self.status = GameStatus::Lost;
            }
            _ => {}
        }

        suggestions
    }

    /// Record that `guess` was played and received `outcome`
    ///
    /// An all-green outcome wins; anything else narrows the pool. Normally follows
    /// `start_round`; a play before any round has started counts toward round 0.
    pub fn play(&mut self, guess: Word, outcome: Outcome) -> GameStatus {
        debug_assert_eq!(self.status, GameStatus::InProgress);
        self.undo_stack.push(Snapshot {
            pool: self.pool.clone(),
            round: self.round.saturating_sub(1),
            played: self.played.len(),
        });

        if outcome.is_perfect() {
            self.status = GameStatus::Won;
        } else {
            self.pool = self.solver.narrow(&self.pool, &guess, &outcome);
        }

        self.played.push(guess.clone());
        self.history.push((guess, outcome));
        self.status
    }

    /// Undo the most recent play
    ///
    /// Returns false if nothing has been played. The next `start_round` repeats the
    /// round that was undone.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };

        self.pool = snapshot.pool;
        self.round = snapshot.round;
        self.played.truncate(snapshot.played);
        self.history.pop();
        self.status = GameStatus::InProgress;
        true
    }

    /// Start over with the full pool
    pub fn reset(&mut self) {
        self.pool = self.solver.initial_pool();
        self.round = 0;
        self.played.clear();
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.undo_stack.clear();
    }

    /// Start the next round and play the strategy's pick against a known `solution`
    ///
    /// Returns the word played and its outcome, or `None` if starting the round ended
    /// the game.
    pub fn play_auto_round(&mut self, strategy: &Strategy, solution: &Word) -> Option<(Word, Outcome)> {
        let filters = strategy.filters_for(self.round + 1);
        let suggestions = self.start_round(&filters);
        if self.status != GameStatus::InProgress {
            return None;
        }

        let ranked: Vec<&Word> = suggestions.iter().map(|s| s.word).collect();
        let guess = strategy.choose(&ranked)?.clone();
        let outcome = Outcome::evaluate(&guess, solution);
        self.play(guess.clone(), outcome);
        Some((guess, outcome))
    }

    /// Summarise the game so far
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult {
            rounds: self.round,
            guesses: self.played.clone(),
            won: self.status == GameStatus::Won,
        }
    }
}

/// Play a game automatically against a known solution
///
/// Each round the strategy picks from the ranked suggestions and the outcome is
/// evaluated against `solution`.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::{Solver, SolverConfig, Strategy, play_known};
///
/// let words: Vec<Word> = ["crane", "slate", "stood", "spoon"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let solver = Solver::new(&words, &words, SolverConfig::default());
///
/// let result = play_known(&solver, &Strategy::default(), &words[2]);
/// assert!(result.won);
/// assert_eq!(result.guesses.last(), Some(&words[2]));
/// ```
#[must_use]
pub fn play_known<'a>(solver: &'a Solver<'a>, strategy: &Strategy, solution: &Word) -> GameResult {
    let mut game = Game::new(solver);

    while game.status() == GameStatus::InProgress {
        if game.play_auto_round(strategy, solution).is_none() {
            break;
        }
    }

    game.result()
}
