//! Guess input resolution shared by the interactive front ends

use crate::core::{Word, WordError};
use crate::solver::{Scored, Solver};
use std::fmt;

/// Why a typed guess was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// A suggestion number outside 1..=len
    OutOfRange { pick: usize, available: usize },
    /// A well-formed word that is not in the guessable list
    NotGuessable(String),
    Invalid(WordError),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pick, available } => {
                write!(f, "No suggestion #{pick} (choose 1-{available})")
            }
            Self::NotGuessable(text) => write!(f, "'{text}' is not in the word list"),
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Resolve typed input to a guess
///
/// A number picks from `suggestions` (1-based); anything else must be a guessable word.
///
/// # Errors
///
/// Returns `GuessError` if the number is out of range or the word is malformed or not
/// guessable.
///
/// # Examples
/// ```
/// use wordle_assist::commands::resolve_guess;
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::{Solver, SolverConfig, WordFilter};
///
/// let words = vec![Word::new("crane").unwrap(), Word::new("stood").unwrap()];
/// let solver = Solver::new(&words, &words, SolverConfig::default());
/// let suggestions = solver.suggest::<WordFilter>(&solver.initial_pool(), &[]);
///
/// assert_eq!(resolve_guess("1", &suggestions, &solver).unwrap(), suggestions[0].word);
/// assert_eq!(resolve_guess("STOOD", &suggestions, &solver).unwrap().text(), "stood");
/// assert!(resolve_guess("3", &suggestions, &solver).is_err());
/// ```
pub fn resolve_guess<'a>(
    input: &str,
    suggestions: &[Scored<'a>],
    solver: &Solver<'a>,
) -> Result<&'a Word, GuessError> {
    let input = input.trim();

    if let Ok(pick) = input.parse::<usize>() {
        return pick
            .checked_sub(1)
            .and_then(|index| suggestions.get(index))
            .map(|entry| entry.word)
            .ok_or(GuessError::OutOfRange {
                pick,
                available: suggestions.len(),
            });
    }

    let word = Word::new(input).map_err(GuessError::Invalid)?;
    solver
        .lookup(word.text())
        .ok_or_else(|| GuessError::NotGuessable(word.text().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolverConfig, WordFilter};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn number_picks_suggestion() {
        let list = words(&["crane", "slate", "stood"]);
        let solver = Solver::new(&list, &list, SolverConfig::default());
        let suggestions = solver.suggest::<WordFilter>(&solver.initial_pool(), &[]);

        assert_eq!(resolve_guess("2", &suggestions, &solver), Ok(suggestions[1].word));
        assert_eq!(
            resolve_guess("0", &suggestions, &solver),
            Err(GuessError::OutOfRange {
                pick: 0,
                available: 3
            })
        );
        assert!(matches!(
            resolve_guess("4", &suggestions, &solver),
            Err(GuessError::OutOfRange { pick: 4, .. })
        ));
    }

    #[test]
    fn word_must_be_guessable() {
        let list = words(&["crane", "slate"]);
        let solver = Solver::new(&list, &list, SolverConfig::default());

        assert_eq!(
            resolve_guess(" slate ", &[], &solver).map(Word::text),
            Ok("slate")
        );
        assert_eq!(
            resolve_guess("stood", &[], &solver),
            Err(GuessError::NotGuessable("stood".to_string()))
        );
        assert!(matches!(
            resolve_guess("sl", &[], &solver),
            Err(GuessError::Invalid(WordError::InvalidLength(2)))
        ));
    }
}
