//! Word solving command
//!
//! Plays a known solution automatically and records every round.

use crate::core::{Outcome, Word};
use crate::solver::{Game, GameStatus, Solver, Strategy};
use anyhow::{Context, Result, bail};

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    pub rounds: usize,
    pub won: bool,
}

/// A single round of the solution path
pub struct GuessStep {
    pub word: Word,
    /// `None` when the round was won because a single candidate remained
    pub outcome: Option<Outcome>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `target` with the given strategy
///
/// # Errors
///
/// Returns an error if the target is not a valid word or cannot be guessed with the
/// current word list.
pub fn solve_word(solver: &Solver<'_>, strategy: &Strategy, target: &str) -> Result<SolveResult> {
    let target = Word::new(target).with_context(|| format!("Invalid target word '{target}'"))?;
    if solver.lookup(target.text()).is_none() {
        bail!("'{target}' is not in the word list");
    }

    let mut game = Game::new(solver);
    let mut steps = Vec::new();

    while game.status() == GameStatus::InProgress {
        let candidates_before = game.pool().len();

        let Some((word, outcome)) = game.play_auto_round(strategy, &target) else {
            if game.status() == GameStatus::Won
                && let Some(last) = game.played().last()
            {
                steps.push(GuessStep {
                    word: last.clone(),
                    outcome: None,
                    candidates_before,
                    candidates_after: candidates_before,
                });
            }
            break;
        };

        steps.push(GuessStep {
            word,
            outcome: Some(outcome),
            candidates_before,
            candidates_after: game.pool().len(),
        });
    }

    let result = game.result();
    Ok(SolveResult {
        target,
        steps,
        rounds: result.rounds,
        won: result.won,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::Vocabulary;

    fn solver_for(vocabulary: &Vocabulary) -> Solver<'_> {
        Solver::new(
            vocabulary.solutions(),
            vocabulary.guessable(),
            SolverConfig::default(),
        )
    }

    #[test]
    fn solve_word_records_steps() {
        let vocabulary = Vocabulary::embedded().unwrap();
        let solver = solver_for(&vocabulary);

        let result = solve_word(&solver, &Strategy::default(), "stood").unwrap();

        assert!(!result.steps.is_empty());
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        if result.won {
            assert_eq!(result.steps.last().map(|s| &s.word), Some(&result.target));
        }
    }

    #[test]
    fn steps_chain_pool_sizes() {
        let vocabulary = Vocabulary::embedded().unwrap();
        let solver = solver_for(&vocabulary);

        let result = solve_word(&solver, &Strategy::default(), "crane").unwrap();
        assert_eq!(result.steps[0].candidates_before, vocabulary.guessable().len());
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn first_guess_win() {
        let list: Vec<Word> = ["stood", "spoon"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let solver = Solver::new(&list, &list, SolverConfig::default());
        let top = solver.suggest::<crate::solver::WordFilter>(&solver.initial_pool(), &[])[0]
            .word
            .clone();

        let result = solve_word(&solver, &Strategy::default(), top.text()).unwrap();
        assert!(result.won);
        assert_eq!(result.rounds, 1);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].outcome, Some(Outcome::PERFECT));
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let vocabulary = Vocabulary::embedded().unwrap();
        let solver = solver_for(&vocabulary);

        assert!(solve_word(&solver, &Strategy::default(), "zzzzz").is_err());
        assert!(solve_word(&solver, &Strategy::default(), "toolong").is_err());
    }
}
